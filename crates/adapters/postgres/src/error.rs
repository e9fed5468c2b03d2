//! 数据库错误映射工具
//!
//! 将 sqlx 错误归类为持久层错误：执行失败、超时、解码失败、配置错误

use refa_errors::AppError;

/// 将 sqlx 错误转换为 AppError
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    match e {
        sqlx::Error::Database(db_err) => match db_err.code() {
            // SQLSTATE 保留在消息中，调用方可据此区分约束冲突
            Some(code) => AppError::execution(format!("Database error ({}): {}", code, db_err)),
            None => AppError::execution(db_err.to_string()),
        },
        sqlx::Error::PoolTimedOut => AppError::timeout("Timed out acquiring a pooled connection"),
        sqlx::Error::PoolClosed => AppError::execution("Database connection pool is closed"),
        sqlx::Error::RowNotFound => AppError::execution("Statement returned no rows"),
        sqlx::Error::ColumnDecode { index, source } => {
            AppError::decode(format!("Failed to decode column {}: {}", index, source))
        }
        sqlx::Error::Decode(source) => AppError::decode(format!("Failed to decode row: {}", source)),
        sqlx::Error::ColumnNotFound(column) => {
            AppError::decode(format!("Column not found in row: {}", column))
        }
        sqlx::Error::ColumnIndexOutOfBounds { index, len } => AppError::decode(format!(
            "Column index {} out of bounds (row has {} columns)",
            index, len
        )),
        sqlx::Error::TypeNotFound { type_name } => {
            AppError::decode(format!("Database type not found: {}", type_name))
        }
        sqlx::Error::Configuration(source) => {
            AppError::configuration(format!("Database configuration error: {}", source))
        }
        other => AppError::execution(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_timeout_is_timeout() {
        let err = map_sqlx_error(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, AppError::Timeout(_)));
    }

    #[test]
    fn test_decode_errors() {
        let err = map_sqlx_error(sqlx::Error::ColumnNotFound("price".to_string()));
        assert!(matches!(err, AppError::Decode(_)));

        let err = map_sqlx_error(sqlx::Error::Decode("unexpected null".into()));
        assert!(matches!(err, AppError::Decode(_)));
    }

    #[test]
    fn test_configuration_error() {
        let err = map_sqlx_error(sqlx::Error::Configuration("bad sslmode".into()));
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[test]
    fn test_other_errors_are_execution() {
        let err = map_sqlx_error(sqlx::Error::RowNotFound);
        assert!(matches!(err, AppError::Execution(_)));

        let err = map_sqlx_error(sqlx::Error::Protocol("unexpected message".to_string()));
        assert!(matches!(err, AppError::Execution(_)));
    }
}
