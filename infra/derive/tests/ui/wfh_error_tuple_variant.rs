use wfh_derive::wfh_error;

#[wfh_error]
pub enum DemoError {
    #[error("Parse failure: {0}")]
    Parse(std::num::ParseIntError),
}

fn main() {}
