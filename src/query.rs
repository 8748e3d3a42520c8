pub const DEFAULT_COMPANY: &str = "Microsoft";
pub const PROFILE_PATTERN: &str = "linkedin.com/in/";

const ROLE_CLAUSE: &str = "('Human Resources' OR 'Talent Acquisition' OR 'Recruiter')";

/// Trimmed company name, falling back to [`DEFAULT_COMPANY`] when blank.
pub fn company_or_default(raw: &str) -> String {
    match raw.trim() {
        "" => DEFAULT_COMPANY.to_string(),
        name => name.to_string(),
    }
}

/// HR role disjunction + quoted company + site restriction.
pub fn build_query(company: &str) -> String {
    format!("{} '{}' site:{}", ROLE_CLAUSE, company, PROFILE_PATTERN)
}
