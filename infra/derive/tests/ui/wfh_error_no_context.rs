use wfh_derive::wfh_error;

#[wfh_error]
pub enum DemoError {
    #[error("Parse failure: {source}")]
    Parse { source: std::num::ParseIntError },
}

fn main() {}
