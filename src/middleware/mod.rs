pub mod json_errors;
