// ABOUTME: Field type descriptors and their per-column-kind adapter tables
// ABOUTME: Each variant renders typed source values into the primitives a Notion column accepts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;
use std::fmt;

use bridge_core::constants::MEASUREMENT_PRECISION;
use bridge_core::units::{format_fixed, round_to_precision};
use bridge_core::{parse_pace_unit, parse_speed_unit, DistanceUnit, Duration, TimeUnit};

use super::record::FieldValue;
use super::timezone::DisplayTimezone;
use crate::constants::formats;
use crate::errors::{AppError, AppResult};
use crate::notion::{ColumnType, PropertyValue};

/// Renders one source value into the primitive a column kind expects
pub type ColumnAdapter = Box<dyn Fn(&FieldValue) -> AppResult<PropertyValue> + Send + Sync>;

/// Adapter table of a field type, keyed by destination column kind
pub type AdapterTable = HashMap<ColumnType, ColumnAdapter>;

/// How a source attribute is interpreted and rendered
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    /// Numeric identifier
    Identifier,
    /// Plain number rounded to `precision` decimals
    Number {
        /// Decimal places kept in every rendering
        precision: u32,
    },
    /// Free text; `default` replaces empty or absent values
    Text {
        /// Replacement for empty or absent values
        default: String,
    },
    /// Yes/No flag
    Boolean,
    /// Instant rendered in a display timezone
    Date {
        /// Timezone the instant is shifted into
        timezone: DisplayTimezone,
    },
    /// Distance converted to `unit`
    Distance {
        /// Target unit
        unit: DistanceUnit,
    },
    /// Duration; number columns receive the total converted to `unit`
    Duration {
        /// Target unit for number columns
        unit: TimeUnit,
    },
    /// Speed converted to `distance_unit / time_unit`
    Speed {
        /// Target numerator
        distance_unit: DistanceUnit,
        /// Target denominator
        time_unit: TimeUnit,
    },
    /// Pace converted to `time_unit / distance_unit`
    Pace {
        /// Target numerator
        time_unit: TimeUnit,
        /// Target denominator
        distance_unit: DistanceUnit,
    },
}

impl FieldType {
    /// Speed field from a compound unit such as `km/h`
    ///
    /// # Errors
    ///
    /// Returns an error if the unit is malformed or either half is unknown
    pub fn speed(unit: &str) -> AppResult<Self> {
        let (distance_unit, time_unit) = parse_speed_unit(unit)?;
        Ok(Self::Speed {
            distance_unit,
            time_unit,
        })
    }

    /// Pace field from a compound unit such as `s/km`
    ///
    /// # Errors
    ///
    /// Returns an error if the unit is malformed or either half is unknown
    pub fn pace(unit: &str) -> AppResult<Self> {
        let (time_unit, distance_unit) = parse_pace_unit(unit)?;
        Ok(Self::Pace {
            time_unit,
            distance_unit,
        })
    }

    /// Name used in configuration and error messages
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Identifier => "identifier",
            Self::Number { .. } => "number",
            Self::Text { .. } => "text",
            Self::Boolean => "boolean",
            Self::Date { .. } => "date",
            Self::Distance { .. } => "distance",
            Self::Duration { .. } => "duration",
            Self::Speed { .. } => "speed",
            Self::Pace { .. } => "pace",
        }
    }

    /// Whether an absent source value is still rendered (through the default).
    ///
    /// Other field types leave the column out of the payload, so the cell
    /// stays empty instead of receiving a made-up zero.
    #[must_use]
    pub const fn accepts_missing(&self) -> bool {
        matches!(self, Self::Text { .. })
    }

    /// Adapter for every column kind this field can be written to.
    ///
    /// A kind missing from the table cannot receive this field; callers turn
    /// that into a validation failure.
    #[must_use]
    pub fn column_type_adapters(&self) -> AdapterTable {
        match self {
            Self::Identifier => identifier_adapters(),
            Self::Number { precision } => number_adapters(*precision),
            Self::Text { default } => text_adapters(default),
            Self::Boolean => boolean_adapters(),
            Self::Date { timezone } => date_adapters(*timezone),
            Self::Distance { unit } => distance_adapters(*unit),
            Self::Duration { unit } => duration_adapters(*unit),
            Self::Speed {
                distance_unit,
                time_unit,
            } => speed_adapters(*distance_unit, *time_unit),
            Self::Pace {
                time_unit,
                distance_unit,
            } => pace_adapters(*time_unit, *distance_unit),
        }
    }

    /// Column kinds this field can be written to, in a stable order
    #[must_use]
    pub fn supported_column_types(&self) -> Vec<ColumnType> {
        let mut column_types: Vec<ColumnType> = self.column_type_adapters().into_keys().collect();
        column_types.sort_unstable();
        column_types
    }

    /// Adapter for one column kind
    ///
    /// # Errors
    ///
    /// Returns an `UnsupportedColumnType` error listing the supported kinds
    /// when this field has no adapter for `column_type`
    pub fn adapter_for(&self, column_type: ColumnType) -> AppResult<ColumnAdapter> {
        let mut adapters = self.column_type_adapters();
        if let Some(adapter) = adapters.remove(&column_type) {
            return Ok(adapter);
        }

        let mut supported: Vec<ColumnType> = adapters.into_keys().collect();
        supported.sort_unstable();
        let supported: Vec<String> = supported.iter().map(ToString::to_string).collect();

        Err(AppError::unsupported_column_type(
            self.name(),
            column_type.as_str(),
            &supported,
        ))
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { precision } => write!(f, "number ({precision} decimals)"),
            Self::Date { timezone } => write!(f, "date ({timezone})"),
            Self::Distance { unit } => write!(f, "distance ({unit})"),
            Self::Duration { unit } => write!(f, "duration ({unit})"),
            Self::Speed {
                distance_unit,
                time_unit,
            } => write!(f, "speed ({distance_unit}/{time_unit})"),
            Self::Pace {
                time_unit,
                distance_unit,
            } => write!(f, "pace ({time_unit}/{distance_unit})"),
            Self::Identifier | Self::Text { .. } | Self::Boolean => f.write_str(self.name()),
        }
    }
}

fn adapter(
    render: impl Fn(&FieldValue) -> AppResult<PropertyValue> + Send + Sync + 'static,
) -> ColumnAdapter {
    Box::new(render)
}

fn mismatch(expected: &str, value: &FieldValue) -> AppError {
    AppError::value_type_mismatch(expected, value.kind())
}

fn identifier_adapters() -> AdapterTable {
    fn identifier(value: &FieldValue) -> AppResult<u64> {
        match value {
            FieldValue::Identifier(id) => Ok(*id),
            other => Err(mismatch("identifier", other)),
        }
    }

    HashMap::from([
        (
            ColumnType::Title,
            adapter(|value| Ok(identifier(value)?.to_string().into())),
        ),
        (
            ColumnType::RichText,
            adapter(|value| Ok(identifier(value)?.to_string().into())),
        ),
        (
            ColumnType::Number,
            adapter(|value| Ok(PropertyValue::Number(identifier(value)? as f64))),
        ),
        // Read-only in Notion; rows are looked up by it rather than written
        (
            ColumnType::UniqueId,
            adapter(|value| Ok(PropertyValue::Number(identifier(value)? as f64))),
        ),
    ])
}

fn number_adapters(precision: u32) -> AdapterTable {
    fn number(value: &FieldValue) -> AppResult<f64> {
        match value {
            FieldValue::Number(number) => Ok(*number),
            FieldValue::Identifier(id) => Ok(*id as f64),
            other => Err(mismatch("number", other)),
        }
    }

    let as_text = move |value: &FieldValue| -> AppResult<PropertyValue> {
        Ok(format_fixed(number(value)?, precision).into())
    };

    HashMap::from([
        (ColumnType::Title, adapter(as_text)),
        (ColumnType::RichText, adapter(as_text)),
        (ColumnType::Select, adapter(as_text)),
        (
            ColumnType::Number,
            adapter(move |value| Ok(round_to_precision(number(value)?, precision).into())),
        ),
    ])
}

fn text_adapters(default: &str) -> AdapterTable {
    [ColumnType::Title, ColumnType::RichText, ColumnType::Select]
        .into_iter()
        .map(|column_type| {
            let default = default.to_owned();
            let render = adapter(move |value| {
                let text = match value {
                    FieldValue::Missing => default.clone(),
                    FieldValue::Text(text) if text.is_empty() => default.clone(),
                    FieldValue::Text(text) => text.clone(),
                    FieldValue::Identifier(id) => id.to_string(),
                    other => return Err(mismatch("text", other)),
                };
                Ok(PropertyValue::Text(text))
            });
            (column_type, render)
        })
        .collect()
}

fn boolean_adapters() -> AdapterTable {
    fn flag(value: &FieldValue) -> AppResult<bool> {
        match value {
            FieldValue::Boolean(flag) => Ok(*flag),
            other => Err(mismatch("boolean", other)),
        }
    }

    fn yes_no(value: &FieldValue) -> AppResult<PropertyValue> {
        let text = if flag(value)? { formats::YES } else { formats::NO };
        Ok(text.into())
    }

    HashMap::from([
        (ColumnType::Title, adapter(yes_no)),
        (ColumnType::RichText, adapter(yes_no)),
        (ColumnType::Select, adapter(yes_no)),
        (
            ColumnType::Checkbox,
            adapter(|value| Ok(PropertyValue::Boolean(flag(value)?))),
        ),
    ])
}

fn date_adapters(timezone: DisplayTimezone) -> AdapterTable {
    let render = move |value: &FieldValue| -> AppResult<PropertyValue> {
        match value {
            FieldValue::Date(instant) => Ok(timezone.format_instant(instant).into()),
            other => Err(mismatch("date", other)),
        }
    };

    HashMap::from([
        (ColumnType::Title, adapter(render)),
        (ColumnType::RichText, adapter(render)),
        (ColumnType::Date, adapter(render)),
    ])
}

fn distance_adapters(unit: DistanceUnit) -> AdapterTable {
    let converted = move |value: &FieldValue| match value {
        FieldValue::Distance(distance) => Ok(distance.convert_to(unit)),
        other => Err(mismatch("distance", other)),
    };

    HashMap::from([
        (
            ColumnType::Title,
            adapter(move |value| Ok(converted(value)?.to_string().into())),
        ),
        (
            ColumnType::RichText,
            adapter(move |value| Ok(converted(value)?.to_string().into())),
        ),
        (
            ColumnType::Number,
            adapter(move |value| {
                let magnitude = converted(value)?.magnitude();
                Ok(round_to_precision(magnitude, MEASUREMENT_PRECISION).into())
            }),
        ),
    ])
}

fn duration_adapters(unit: TimeUnit) -> AdapterTable {
    fn duration(value: &FieldValue) -> AppResult<Duration> {
        match value {
            FieldValue::Duration(duration) => Ok(*duration),
            other => Err(mismatch("duration", other)),
        }
    }

    fn display(value: &FieldValue) -> AppResult<PropertyValue> {
        Ok(duration(value)?.to_string().into())
    }

    HashMap::from([
        (ColumnType::Title, adapter(display)),
        (ColumnType::RichText, adapter(display)),
        (ColumnType::Select, adapter(display)),
        (
            ColumnType::Number,
            adapter(move |value| {
                let magnitude = duration(value)?.convert_to(unit);
                Ok(round_to_precision(magnitude, MEASUREMENT_PRECISION).into())
            }),
        ),
    ])
}

fn speed_adapters(distance_unit: DistanceUnit, time_unit: TimeUnit) -> AdapterTable {
    let converted = move |value: &FieldValue| match value {
        FieldValue::Speed(speed) => Ok(speed.convert_to(distance_unit, time_unit)),
        other => Err(mismatch("speed", other)),
    };

    HashMap::from([
        (
            ColumnType::Title,
            adapter(move |value| Ok(converted(value)?.to_string().into())),
        ),
        (
            ColumnType::RichText,
            adapter(move |value| Ok(converted(value)?.to_string().into())),
        ),
        (
            ColumnType::Number,
            adapter(move |value| {
                let magnitude = converted(value)?.magnitude();
                Ok(round_to_precision(magnitude, MEASUREMENT_PRECISION).into())
            }),
        ),
    ])
}

fn pace_adapters(time_unit: TimeUnit, distance_unit: DistanceUnit) -> AdapterTable {
    let converted = move |value: &FieldValue| match value {
        FieldValue::Pace(pace) => Ok(pace.convert_to(time_unit, distance_unit)),
        other => Err(mismatch("pace", other)),
    };

    HashMap::from([
        (
            ColumnType::Title,
            adapter(move |value| Ok(converted(value)?.to_string().into())),
        ),
        (
            ColumnType::RichText,
            adapter(move |value| Ok(converted(value)?.to_string().into())),
        ),
        (
            ColumnType::Number,
            adapter(move |value| {
                let magnitude = converted(value)?.magnitude();
                Ok(round_to_precision(magnitude, MEASUREMENT_PRECISION).into())
            }),
        ),
    ])
}
