use std::io::{self, Write};

use crate::profiles::ProfileUrls;

const NO_RESULTS_HINTS: [&str; 3] = [
    "No HR professionals found at this company on LinkedIn",
    "LinkedIn blocking search results",
    "Company name not matching LinkedIn profiles",
];

pub fn print_profiles<W: Write>(out: &mut W, company: &str, profiles: &ProfileUrls) -> io::Result<()> {
    writeln!(out, "Found LinkedIn Profile URLs for HR at {}:", company)?;

    if profiles.is_empty() {
        writeln!(out, "No LinkedIn profiles found for the specified search.")?;
        writeln!(out, "This might be due to:")?;
        for hint in NO_RESULTS_HINTS {
            writeln!(out, "- {}", hint)?;
        }
        return Ok(());
    }

    writeln!(out, "\n✅ Found {} unique LinkedIn profiles:", profiles.len())?;
    for (i, url) in profiles.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, url)?;
    }
    Ok(())
}

pub fn print_config_error<W: Write>(out: &mut W, err: &impl std::fmt::Display) -> io::Result<()> {
    writeln!(out, "❌ Error: {}.", err)?;
    writeln!(
        out,
        "Please set your Tavily API key in a .env file or as an environment variable."
    )
}

pub fn print_search_error<W: Write>(out: &mut W, err: &impl std::fmt::Display) -> io::Result<()> {
    writeln!(out, "Error occurred during search: {}", err)?;
    writeln!(out, "Please check your API key and internet connection.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tavily::SearchResult;

    fn render(profiles: &ProfileUrls) -> String {
        let mut buf = Vec::new();
        print_profiles(&mut buf, "Microsoft", profiles).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn numbered_listing() {
        let results: Vec<SearchResult> = ["https://www.linkedin.com/in/a", "https://www.linkedin.com/in/b"]
            .iter()
            .map(|u| SearchResult { url: Some(u.to_string()), title: None })
            .collect();
        let out = render(&ProfileUrls::collect(&results));
        assert!(out.contains("✅ Found 2 unique LinkedIn profiles:"));
        assert!(out.contains("1. https://www.linkedin.com/in/a\n2. https://www.linkedin.com/in/b\n"));
        assert!(!out.contains("No LinkedIn profiles found"));
    }

    #[test]
    fn empty_prints_hints_only() {
        let out = render(&ProfileUrls::default());
        assert!(out.contains("No LinkedIn profiles found for the specified search."));
        for hint in NO_RESULTS_HINTS {
            assert!(out.contains(&format!("- {}\n", hint)));
        }
        assert!(!out.contains("1. "));
        assert!(!out.contains("✅"));
    }
}
