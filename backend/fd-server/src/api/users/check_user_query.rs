use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct CheckUserQuery {
    pub email: Option<String>,
}
