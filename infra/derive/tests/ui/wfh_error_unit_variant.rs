use wfh_derive::wfh_error;

#[wfh_error]
pub enum DemoError {
    #[error("Nothing to apply")]
    Empty,
}

fn main() {}
