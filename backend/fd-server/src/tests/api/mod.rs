mod error;
mod extractors;
mod validator;
