use crate::utils::AppError;
use mongodb::bson::{self, oid::ObjectId, Bson};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// A macro nutrient count (calories, proteins, fats, carbs).
///
/// Submitted values are coerced by integer-prefix parsing. Anything that
/// does not start with digits becomes `NotANumber`, which is persisted as a
/// NaN double and rendered as JSON `null`. Integers too large for `i64` are
/// kept as an approximate double.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MacroValue {
    Whole(i64),
    Approximate(f64),
    NotANumber,
}

impl MacroValue {
    pub fn coerce(raw: Option<&Value>) -> Self {
        match raw {
            Some(Value::String(text)) => Self::parse_prefix(text),
            Some(Value::Number(number)) => {
                if let Some(n) = number.as_i64() {
                    MacroValue::Whole(n)
                } else if let Some(f) = number.as_f64() {
                    Self::from_f64(f)
                } else {
                    MacroValue::NotANumber
                }
            }
            _ => MacroValue::NotANumber,
        }
    }

    /// Parses an optional sign followed by the longest run of decimal digits,
    /// ignoring leading whitespace and any trailing text.
    pub fn parse_prefix(text: &str) -> Self {
        let trimmed = text.trim_start();
        let (negative, rest) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if len == 0 {
            return MacroValue::NotANumber;
        }
        let digits = &rest[..len];

        let mut value: i64 = 0;
        for byte in digits.bytes() {
            let digit = i64::from(byte - b'0');
            let next = value.checked_mul(10).and_then(|v| {
                if negative {
                    v.checked_sub(digit)
                } else {
                    v.checked_add(digit)
                }
            });
            match next {
                Some(v) => value = v,
                None => {
                    let magnitude = digits.parse::<f64>().unwrap_or(f64::INFINITY);
                    let approx = if negative { -magnitude } else { magnitude };
                    return if approx.is_finite() {
                        MacroValue::Approximate(approx)
                    } else {
                        MacroValue::NotANumber
                    };
                }
            }
        }

        MacroValue::Whole(value)
    }

    fn from_f64(value: f64) -> Self {
        let truncated = value.trunc();
        if !truncated.is_finite() {
            MacroValue::NotANumber
        } else if truncated >= i64::MIN as f64 && truncated < i64::MAX as f64 {
            MacroValue::Whole(truncated as i64)
        } else {
            MacroValue::Approximate(truncated)
        }
    }
}

impl Serialize for MacroValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MacroValue::Whole(n) => match i32::try_from(*n) {
                Ok(small) => serializer.serialize_i32(small),
                Err(_) => serializer.serialize_i64(*n),
            },
            MacroValue::Approximate(f) => serializer.serialize_f64(*f),
            MacroValue::NotANumber => serializer.serialize_f64(f64::NAN),
        }
    }
}

/// A meal as inserted into the Meals collection. Text fields and
/// `ingredients` keep whatever shape the client submitted; reads return the
/// stored documents as they are.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub meal_name: Bson,
    pub meal_date: Bson,
    pub meal_description: Bson,
    pub meal_calories: MacroValue,
    pub proteins: MacroValue,
    pub fats: MacroValue,
    pub carbs: MacroValue,
    pub ingredients: Bson,
    pub user_id: ObjectId,
}

/// Converts a submitted field to BSON unchanged; absent becomes null.
pub fn submitted_field(value: Option<&Value>) -> Result<Bson, AppError> {
    match value {
        Some(value) => Ok(bson::to_bson(value)?),
        None => Ok(Bson::Null),
    }
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddMealRequest {
    #[schema(value_type = Option<String>)]
    pub meal_name: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub meal_date: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub meal_description: Option<Value>,
    /// Text or number; parsed as a whole number
    #[schema(value_type = Option<String>)]
    pub meal_calories: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub proteins: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub fats: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub carbs: Option<Value>,
    #[schema(value_type = Option<Vec<String>>)]
    pub ingredients: Option<Value>,
    /// Owner ObjectId as 24 hex characters
    #[schema(value_type = Option<String>)]
    pub user_id: Option<Value>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MealsByUserRequest {
    #[schema(value_type = Option<String>)]
    pub user_id: Option<Value>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatedMealResponse {
    pub success: bool,
    pub meal_id: String,
}
