//! Custom `serde` serializer and deserializer implementations

/// Serialize a [`std::time::Duration`] as seconds into a f64 value
///
/// The summary file stores wall-clock times as plain seconds instead of the `{secs, nanos}` pair
/// of the default `Duration` format.
pub mod duration_secs {
    use std::time::Duration;

    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize `input` as f64 seconds
    pub fn serialize<S>(input: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(input.as_secs_f64())
    }

    /// Deserialize f64 seconds into a [`Duration`]
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(|error| D::Error::custom(error.to_string()))
    }
}

/// Like [`duration_secs`] but for optional durations
pub mod option_duration_secs {
    use std::time::Duration;

    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize `input` as f64 seconds or null
    pub fn serialize<S>(input: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match input {
            Some(duration) => serializer.serialize_some(&duration.as_secs_f64()),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize f64 seconds or null into an optional [`Duration`]
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<f64>::deserialize(deserializer)?
            .map(|secs| {
                Duration::try_from_secs_f64(secs)
                    .map_err(|error| D::Error::custom(error.to_string()))
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
    struct ValueFixture {
        #[serde(with = "super::duration_secs")]
        value: Duration,
    }

    #[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
    struct OptionalFixture {
        #[serde(with = "super::option_duration_secs")]
        value: Option<Duration>,
    }

    #[rstest]
    #[case::zero(Duration::ZERO)]
    #[case::micros(Duration::from_micros(12))]
    #[case::seconds(Duration::from_secs(3))]
    fn test_duration_secs_round_trip(#[case] value: Duration) {
        let fixture = ValueFixture { value };
        let serialized = serde_json::to_string(&fixture).unwrap();

        assert_eq!(
            serde_json::from_str::<ValueFixture>(&serialized).unwrap(),
            fixture
        );
    }

    #[test]
    fn test_duration_secs_negative_is_an_error() {
        assert!(serde_json::from_str::<ValueFixture>(r#"{"value":-1.0}"#).is_err());
    }

    #[test]
    fn test_option_duration_secs_none_is_null() {
        let serialized = serde_json::to_string(&OptionalFixture { value: None }).unwrap();

        assert_eq!(serialized, r#"{"value":null}"#);
        assert_eq!(
            serde_json::from_str::<OptionalFixture>(&serialized).unwrap(),
            OptionalFixture { value: None }
        );
    }
}
