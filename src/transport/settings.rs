pub const CREDIT_PATH: &str = "/v1/credit";
pub const LINE_NUMBERS_PATH: &str = "/v1/line";
