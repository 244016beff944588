//! Notify command handler.

use crate::config::{merge_tags, Config, Overrides};
use crate::error::Result;
use crate::notifier::Message;

use super::deliver;

const DEFAULT_TITLE: &str = "📢 term_notify";
const TAG: &str = "loudspeaker";

/// Build the ad-hoc message; words are joined with single spaces.
pub fn notify_message(
    config: &Config,
    overrides: &Overrides,
    title: Option<&str>,
    words: &[String],
) -> Message {
    let title = title.filter(|t| !t.is_empty()).unwrap_or(DEFAULT_TITLE);

    Message::from_config(config)
        .with_title(title)
        .with_body(words.join(" "))
        .with_tags(merge_tags(TAG, overrides.user_tags()))
}

/// Send a one-shot notification.
///
/// # Returns
///
/// * `Ok(())` once the server accepted the message
/// * `Err(TnError::Notify)` if it was not delivered
pub fn notify_command(
    config: &Config,
    overrides: &Overrides,
    title: Option<&str>,
    words: &[String],
) -> Result<()> {
    let msg = notify_message(config, overrides, title, words);
    deliver(&msg)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TnError;
    use crate::notifier::NotifyError;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_default_title_and_tag() {
        let msg = notify_message(
            &Config::default(),
            &Overrides::default(),
            None,
            &words(&["Build", "complete!"]),
        );
        assert_eq!(msg.title, "📢 term_notify");
        assert_eq!(msg.body, "Build complete!");
        assert_eq!(msg.tags, "loudspeaker");
    }

    #[test]
    fn test_custom_title_and_user_tags() {
        let overrides = Overrides {
            tags: Some("rocket".to_string()),
            ..Default::default()
        };
        let msg = notify_message(
            &Config::default(),
            &overrides,
            Some("Deploy"),
            &words(&["done"]),
        );
        assert_eq!(msg.title, "Deploy");
        assert_eq!(msg.tags, "loudspeaker,rocket");
    }

    #[test]
    fn test_notify_posts_to_server() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/alerts")
            .match_header("tags", "loudspeaker")
            .match_body("hello there")
            .with_status(200)
            .create();

        let config = Config {
            server: server.url(),
            topic: "alerts".to_string(),
            ..Default::default()
        };
        notify_command(
            &config,
            &Overrides::default(),
            Some("Hi"),
            &words(&["hello", "there"]),
        )
        .unwrap();
        mock.assert();
    }

    #[test]
    fn test_notify_without_topic_fails() {
        let err = notify_command(
            &Config::default(),
            &Overrides::default(),
            None,
            &words(&["x"]),
        )
        .unwrap_err();
        assert!(matches!(err, TnError::Notify(NotifyError::MissingTopic)));
    }
}
