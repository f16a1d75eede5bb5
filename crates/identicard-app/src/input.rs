//! Identity record assembly from JSON input and flags.

use std::io::Read;

use identicard_core::model::{IdentityRecord, SocialPlatform};

use crate::cli::RecordArgs;
use crate::error::{AppError, AppResult};

/// Input path that means "read standard input".
pub const STDIN_PATH: &str = "-";

/// ## Summary
/// Reads a JSON identity record from a file, or stdin for `-`.
///
/// ## Errors
/// Returns an error if the input cannot be read or is not a valid record.
pub fn read_record(path: &str) -> AppResult<IdentityRecord> {
    let read_err = |source| AppError::ReadInput {
        path: path.to_string(),
        source,
    };

    let json = if path == STDIN_PATH {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(read_err)?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(read_err)?
    };

    parse_record(&json)
}

/// ## Summary
/// Parses a JSON identity record.
///
/// ## Errors
/// Returns `AppError::InvalidRecord` if the JSON does not describe a record.
pub fn parse_record(json: &str) -> AppResult<IdentityRecord> {
    Ok(serde_json::from_str(json)?)
}

impl RecordArgs {
    /// ## Summary
    /// Builds the record: the `--input` file first, then each given flag on top.
    ///
    /// ## Errors
    /// Returns an error if the input file cannot be read or parsed.
    pub fn into_record(self) -> AppResult<IdentityRecord> {
        let mut record = match self.input.as_deref() {
            Some(path) => read_record(path)?,
            None => IdentityRecord::default(),
        };

        for (slot, value) in [
            (&mut record.first_name, self.first_name),
            (&mut record.last_name, self.last_name),
            (&mut record.email, self.email),
            (&mut record.phone_country_code, self.dial_code),
            (&mut record.phone, self.phone),
            (&mut record.website, self.website),
            (&mut record.company, self.company),
            (&mut record.title, self.title),
            (&mut record.note, self.note),
        ] {
            if value.is_some() {
                *slot = value;
            }
        }

        let platform_flags = [
            (SocialPlatform::Linkedin, self.linkedin),
            (SocialPlatform::Instagram, self.instagram),
            (SocialPlatform::Twitter, self.twitter),
            (SocialPlatform::Github, self.github),
            (SocialPlatform::Youtube, self.youtube),
            (SocialPlatform::Facebook, self.facebook),
            (SocialPlatform::Tiktok, self.tiktok),
        ];
        let links = platform_flags
            .into_iter()
            .filter_map(|(platform, url)| url.map(|url| (platform, url)))
            .chain(self.social);

        for (platform, url) in links {
            record.social.set(platform, url);
        }

        tracing::debug!(
            has_data = record.has_any_data(),
            "Identity record assembled"
        );

        Ok(record)
    }
}
