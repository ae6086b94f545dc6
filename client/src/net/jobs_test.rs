use super::*;

#[test]
fn public_jobs_endpoint_omits_blank_search() {
    assert_eq!(public_jobs_endpoint(""), "/jobs");
    assert_eq!(public_jobs_endpoint("   "), "/jobs");
}

#[test]
fn public_jobs_endpoint_encodes_search() {
    assert_eq!(public_jobs_endpoint("rust dev"), "/jobs?search=rust%20dev");
    assert_eq!(public_jobs_endpoint("c++&go"), "/jobs?search=c%2B%2B%26go");
}

#[test]
fn public_job_endpoint_encodes_slug() {
    assert_eq!(public_job_endpoint("backend-engineer-11"), "/jobs/backend-engineer-11");
}

#[test]
fn company_job_endpoint_formats_id() {
    assert_eq!(company_job_endpoint(42), "/company-jobs/42");
}

#[test]
fn public_job_endpoint_escapes_path_separators() {
    assert_eq!(public_job_endpoint("a/b"), "/jobs/a%2Fb");
}
