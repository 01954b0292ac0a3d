use secrecy::SecretString;
use uuid::Uuid;

#[derive(Debug, sqlx::FromRow)]
pub struct ServiceCenterCredentialModel {
    pub id: Uuid,
    pub username: String,
    pub password: String,
    pub district: String,
    pub pincode: String,
}

impl ServiceCenterCredentialModel {
    pub fn password_hash(&self) -> SecretString {
        SecretString::from(self.password.clone())
    }
}
