//! `tokio-postgres` integration: built arguments can be passed straight to a client.

use super::Value;
use bytes::BytesMut;
use std::error::Error;
use tokio_postgres::types::{IsNull, ToSql, Type, to_sql_checked};

impl ToSql for Value {
    fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        match self {
            Value::Null => Ok(IsNull::Yes),
            Value::Bool(v) => v.to_sql_checked(ty, out),
            // Integers are stored as i64; narrow them when the server asks for less.
            Value::Int(v) => {
                if *ty == Type::INT2 {
                    i16::try_from(*v)?.to_sql_checked(ty, out)
                } else if *ty == Type::INT4 {
                    i32::try_from(*v)?.to_sql_checked(ty, out)
                } else {
                    v.to_sql_checked(ty, out)
                }
            }
            Value::Float(v) => {
                if *ty == Type::FLOAT4 {
                    if v.is_finite() && v.abs() > f64::from(f32::MAX) {
                        return Err(format!("{v} is out of range for FLOAT4").into());
                    }
                    (*v as f32).to_sql_checked(ty, out)
                } else {
                    v.to_sql_checked(ty, out)
                }
            }
            Value::Text(v) => v.to_sql_checked(ty, out),
            Value::Bytes(v) => <&[u8] as ToSql>::to_sql_checked(&&v[..], ty, out),
            Value::Json(v) => v.to_sql_checked(ty, out),
            Value::Uuid(v) => v.to_sql_checked(ty, out),
            Value::Date(v) => v.to_sql_checked(ty, out),
            Value::Timestamp(v) => v.to_sql_checked(ty, out),
            Value::TimestampTz(v) => v.to_sql_checked(ty, out),
            Value::List(_) => Err("list arguments must be flattened before they are sent".into()),
        }
    }

    fn accepts(_ty: &Type) -> bool {
        true
    }

    to_sql_checked!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_is_encoded_as_sql_null() {
        let mut buf = BytesMut::new();
        let is_null = Value::Null.to_sql(&Type::INT4, &mut buf).unwrap();
        assert!(matches!(is_null, IsNull::Yes));
        assert!(buf.is_empty());
    }

    #[test]
    fn int_is_narrowed_for_int4() {
        let mut buf = BytesMut::new();
        Value::Int(7).to_sql(&Type::INT4, &mut buf).unwrap();
        assert_eq!(buf.as_ref(), &7i32.to_be_bytes());
    }

    #[test]
    fn int_out_of_range_for_int2_fails() {
        let mut buf = BytesMut::new();
        assert!(Value::Int(i64::from(i16::MAX) + 1).to_sql(&Type::INT2, &mut buf).is_err());
    }

    #[test]
    fn float_is_narrowed_for_float4() {
        let mut buf = BytesMut::new();
        Value::Float(1.5).to_sql(&Type::FLOAT4, &mut buf).unwrap();
        assert_eq!(buf.as_ref(), &1.5f32.to_be_bytes());

        let mut buf = BytesMut::new();
        Value::Float(f64::INFINITY).to_sql(&Type::FLOAT4, &mut buf).unwrap();
        assert_eq!(buf.as_ref(), &f32::INFINITY.to_be_bytes());
    }

    #[test]
    fn float_out_of_range_for_float4_fails() {
        let mut buf = BytesMut::new();
        assert!(Value::Float(1e300).to_sql(&Type::FLOAT4, &mut buf).is_err());
        assert!(Value::Float(-1e300).to_sql(&Type::FLOAT4, &mut buf).is_err());
        assert!(Value::Float(1e300).to_sql(&Type::FLOAT8, &mut buf).is_ok());
    }

    #[test]
    fn text_rejects_integer_column() {
        let mut buf = BytesMut::new();
        assert!(Value::from("x").to_sql(&Type::INT8, &mut buf).is_err());
    }

    #[test]
    fn list_is_rejected() {
        let mut buf = BytesMut::new();
        assert!(Value::from(vec![1, 2]).to_sql(&Type::INT8, &mut buf).is_err());
    }
}
