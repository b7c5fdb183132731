use super::*;
use pretty_assertions::assert_eq;

#[test]
fn default_is_empty() {
    assert_eq!(FeatureFlags::default(), FeatureFlags::empty());
}

#[test]
fn names_cover_every_flag() {
    let union = FeatureFlags::names()
        .iter()
        .fold(FeatureFlags::empty(), |acc, (_, f)| acc | *f);
    assert_eq!(union, FeatureFlags::all());
}

#[test]
fn from_feature_name_accepts_spellings() {
    for name in ["text-emoji", "text_emoji", "textEmoji", "TEXT-EMOJI"] {
        assert_eq!(
            FeatureFlags::from_feature_name(name),
            Some(FeatureFlags::TEXT_EMOJI),
            "{name}"
        );
    }
    assert_eq!(
        FeatureFlags::from_feature_name("stickyLink"),
        Some(FeatureFlags::STICKY_LINK)
    );
    assert_eq!(FeatureFlags::from_feature_name("all"), Some(FeatureFlags::all()));
    assert_eq!(FeatureFlags::from_feature_name("none"), Some(FeatureFlags::empty()));
    assert_eq!(FeatureFlags::from_feature_name("emoji"), None);
}

#[test]
fn parse_list() {
    let flags: Result<FeatureFlags, _> = "link, hashtag,userSticker".parse();
    assert_eq!(
        flags,
        Ok(FeatureFlags::LINK | FeatureFlags::HASHTAG | FeatureFlags::USER_STICKER)
    );
}

#[test]
fn parse_empty_list_is_none() {
    assert_eq!("".parse::<FeatureFlags>(), Ok(FeatureFlags::empty()));
    assert_eq!("  ".parse::<FeatureFlags>(), Ok(FeatureFlags::empty()));
}

#[test]
fn parse_rejects_unknown_name() {
    let err = "link,bogus".parse::<FeatureFlags>();
    assert!(matches!(
        err,
        Err(FeatureParseError::UnknownFeature { ref name, .. }) if name == "bogus"
    ));
}

#[test]
fn parse_rejects_empty_entry() {
    assert_eq!(
        "link,,hashtag".parse::<FeatureFlags>(),
        Err(FeatureParseError::EmptyName {
            list: "link,,hashtag".to_string()
        })
    );
}

#[test]
fn display_round_trips() {
    let flags = FeatureFlags::MARKDOWN | FeatureFlags::TEXT_EMOJI;
    assert_eq!(flags.to_string(), "text-emoji,markdown");
    assert_eq!(flags.to_string().parse::<FeatureFlags>(), Ok(flags));
    assert_eq!(FeatureFlags::empty().to_string(), "none");
}

#[test]
fn unknown_feature_message_lists_expected() {
    let Err(err) = "nope".parse::<FeatureFlags>() else {
        panic!("expected an error");
    };
    let message = err.to_string();
    assert!(message.contains("unknown feature `nope`"), "{message}");
    assert!(message.contains("text-emoji"), "{message}");
}

#[test]
fn emphasis_from_either_flag() {
    assert!(FeatureFlags::MARKDOWN.emphasis());
    assert!(FeatureFlags::FORMATTING.emphasis());
    assert!(!FeatureFlags::LINK.emphasis());
}
