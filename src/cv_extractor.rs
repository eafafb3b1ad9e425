//! CV field extraction for the applicant detail view (spec.md §4.6).
//!
//! Ported from `original_source/src/cv_extractor.py`'s regex-based section
//! splitter. This runs only when a user asks for one applicant's detail, not
//! during search, so cost is never a concern here.

use regex::Regex;

/// Structured fields pulled out of a free-text CV.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CvDetail {
    pub summary: String,
    pub skills: Vec<String>,
    pub experience: Vec<String>,
    pub education: Vec<String>,
}

/// Splits CV text into summary/skills/experience/education sections.
pub trait CvFieldExtractor: Send + Sync {
    fn extract(&self, cv_text: &str) -> CvDetail;
}

/// Header-anchored extractor, grounded on
/// `original_source/src/cv_extractor.py`'s `extract_summary`/`extract_skills`/
/// `extract_experience`/`extract_education`: each section runs from its own
/// header line up to the next recognized header (or end of text). The
/// `regex` crate has no look-around, so headers are located first and the
/// text is sliced between consecutive header starts rather than captured
/// directly.
pub struct RegexCvFieldExtractor {
    header: Regex,
}

impl Default for RegexCvFieldExtractor {
    fn default() -> Self {
        Self {
            // `(?im)` — case-insensitive, `^`/`$` match per line.
            header: Regex::new(r"(?im)^\s*(summary|skills?|experience|education)\s*:?\s*$")
                .expect("static regex"),
        }
    }
}

impl RegexCvFieldExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps a matched header word to its canonical section key.
    fn section_key(header: &str) -> &'static str {
        match header.to_lowercase().as_str() {
            "summary" => "summary",
            "skill" | "skills" => "skills",
            "experience" => "experience",
            "education" => "education",
            _ => unreachable!("regex only matches the four known headers"),
        }
    }

    /// Splits a section body into bullet-ish lines, dropping blanks — the
    /// source treats every non-empty line of `skills`/`experience`/
    /// `education` as one entry.
    fn lines(body: &str) -> Vec<String> {
        body.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.trim_start_matches(['-', '*', '•']).trim().to_string())
            .filter(|line| !line.is_empty())
            .collect()
    }
}

impl CvFieldExtractor for RegexCvFieldExtractor {
    fn extract(&self, cv_text: &str) -> CvDetail {
        let headers: Vec<(&'static str, usize, usize)> = self
            .header
            .captures_iter(cv_text)
            .map(|c| {
                let whole = c.get(0).expect("group 0 always matches");
                let word = c.get(1).expect("header regex always captures group 1");
                (Self::section_key(word.as_str()), whole.start(), whole.end())
            })
            .collect();

        let mut bodies: std::collections::HashMap<&'static str, String> = std::collections::HashMap::new();
        for (idx, &(key, _, header_end)) in headers.iter().enumerate() {
            let body_end = headers.get(idx + 1).map_or(cv_text.len(), |&(_, start, _)| start);
            let body = cv_text[header_end..body_end].trim();
            if !body.is_empty() {
                bodies.entry(key).or_insert_with(|| body.to_string());
            }
        }

        let summary = bodies.get("summary").cloned().unwrap_or_default();
        let skills = bodies.get("skills").map(|b| Self::lines(b)).unwrap_or_default();
        let experience = bodies.get("experience").map(|b| Self::lines(b)).unwrap_or_default();
        let education = bodies.get("education").map(|b| Self::lines(b)).unwrap_or_default();

        CvDetail {
            summary,
            skills,
            experience,
            education,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Summary:
Backend engineer with 5 years of experience in distributed systems.

Skills:
- Rust
- Python
- SQL

Experience:
Senior Engineer at Acme Corp, 2021-2024
Engineer at Beta LLC, 2018-2021

Education:
B.Sc. Computer Science, State University
";

    #[test]
    fn splits_all_four_sections() {
        let extractor = RegexCvFieldExtractor::new();
        let detail = extractor.extract(SAMPLE);
        assert!(detail.summary.contains("Backend engineer"));
        assert_eq!(detail.skills, vec!["Rust", "Python", "SQL"]);
        assert_eq!(detail.experience.len(), 2);
        assert_eq!(detail.education, vec!["B.Sc. Computer Science, State University"]);
    }

    #[test]
    fn missing_sections_are_empty_not_error() {
        let extractor = RegexCvFieldExtractor::new();
        let detail = extractor.extract("just a name and nothing else");
        assert_eq!(detail, CvDetail::default());
    }
}
