use crate::domain::errors::DomainError;

const CNT_CLIENT_PHONE: &str = "clients_phone_key";
const CNT_USER_LOGIN: &str = "users_login_key";
const CNT_PRODUCT_CLIENT: &str = "products_client_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                match constraint {
                    CNT_CLIENT_PHONE => {
                        return DomainError::Conflict(
                            "a client with this phone number already exists".into(),
                        );
                    }
                    CNT_USER_LOGIN => {
                        return DomainError::Conflict("login already exists".into());
                    }
                    CNT_PRODUCT_CLIENT => {
                        return DomainError::NotFound("client not found".into());
                    }
                    _ => {}
                }
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
