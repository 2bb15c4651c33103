use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod policies;
pub mod services;

#[derive(Clone, Debug)]
pub struct WasfaConfig {
    pub database: DatabaseConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    pub fn connection_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}

/// URL slug from a display name. Keeps Unicode letters (Arabic titles keep
/// their letters), lowercases, and turns whitespace runs into single dashes.
/// Idempotent.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.trim().chars() {
        if c.is_whitespace() || c == '-' || c == '_' {
            pending_dash = !slug.is_empty();
        } else if c.is_alphanumeric() {
            if pending_dash {
                slug.push('-');
                pending_dash = false;
            }
            slug.extend(c.to_lowercase());
        }
        // Punctuation is dropped without leaving a dash.
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn slugify_collapses_whitespace_and_lowercases() {
        assert_eq!(slugify("  Chicken   Shawarma  "), "chicken-shawarma");
    }

    #[test]
    fn slugify_keeps_arabic_letters() {
        assert_eq!(slugify("كبة مقلية"), "كبة-مقلية");
    }

    #[test]
    fn slugify_drops_punctuation() {
        assert_eq!(slugify("Mom's (best) pie!"), "moms-best-pie");
    }

    #[test]
    fn slugify_is_idempotent() {
        let once = slugify("Kibbeh, Aleppo Style");
        assert_eq!(slugify(&once), once);
    }
}
