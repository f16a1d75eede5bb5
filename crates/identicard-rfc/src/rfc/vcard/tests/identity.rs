//! Output of `build_vcard` for identity records.

use super::fixtures::*;
use crate::rfc::vcard::build_vcard;
use identicard_core::model::SocialPlatform;

fn lines(card: &str) -> Vec<&str> {
    card.split('\n').collect()
}

#[test_log::test]
fn always_has_envelope() {
    let vcard = build_vcard(&empty_form());

    assert!(vcard.contains("BEGIN:VCARD"));
    assert!(vcard.contains("VERSION:4.0"));
    assert!(vcard.contains("END:VCARD"));
    assert!(vcard.starts_with("BEGIN:VCARD\n"));
    assert!(vcard.ends_with("\nEND:VCARD"));
}

#[test_log::test]
fn empty_form_is_minimal() {
    let vcard = build_vcard(&empty_form());

    assert_eq!(vcard, "BEGIN:VCARD\nVERSION:4.0\nFN:Unknown\nEND:VCARD");
    assert!(!vcard.contains("EMAIL:"));
    assert!(!vcard.contains("TEL;"));
    assert!(lines(&vcard).iter().all(|l| !l.starts_with("ORG:")));
    assert!(lines(&vcard).iter().all(|l| !l.starts_with("TITLE:")));
}

#[test]
fn first_and_last_name() {
    let mut form = empty_form();
    form.first_name = Some("Ali".into());
    form.last_name = Some("Yılmaz".into());
    let vcard = build_vcard(&form);

    assert!(vcard.contains("N:Yılmaz;Ali;;;"));
    assert!(vcard.contains("FN:Ali Yılmaz"));
}

#[test]
fn only_first_name() {
    let vcard = build_vcard(&named("Ayşe"));

    assert!(lines(&vcard).contains(&"N:;Ayşe;;;"));
    assert!(lines(&vcard).contains(&"FN:Ayşe"));
}

#[test]
fn names_are_trimmed() {
    let mut form = named("  Jane ");
    form.last_name = Some(" Doe  ".into());
    let vcard = build_vcard(&form);

    assert!(lines(&vcard).contains(&"N:Doe;Jane;;;"));
    assert!(lines(&vcard).contains(&"FN:Jane Doe"));
}

#[test]
fn email_phone_and_website() {
    let mut form = named("Test");
    form.email = Some("test@example.com".into());
    form.phone_country_code = Some("+90".into());
    form.phone = Some("0555 123 45 67".into());
    form.website = Some("https://example.com".into());
    let vcard = build_vcard(&form);

    assert!(vcard.contains("EMAIL:test@example.com"));
    assert!(vcard.contains("TEL;TYPE=cell:+905551234567"));
    assert!(vcard.contains("URL:https://example.com"));
}

#[test]
fn blank_dial_code_uses_default() {
    let mut form = named("Test");
    form.phone_country_code = Some("  ".into());
    form.phone = Some("0555 123 45 67".into());

    assert!(build_vcard(&form).contains("TEL;TYPE=cell:+905551234567"));
}

#[test]
fn other_country_keeps_leading_zero() {
    let mut form = named("Test");
    form.phone_country_code = Some("+44".into());
    form.phone = Some("020 7946 0018".into());

    assert!(build_vcard(&form).contains("TEL;TYPE=cell:+4402079460018"));
}

#[test]
fn whitespace_phone_is_omitted() {
    let mut form = named("Test");
    form.phone = Some(" \t ".into());

    assert!(!build_vcard(&form).contains("TEL"));
}

#[test]
fn website_gets_https() {
    let mut form = named("X");
    form.website = Some("example.com".into());

    assert!(build_vcard(&form).contains("URL:https://example.com"));
}

#[test]
fn company_and_title() {
    let mut form = named("A");
    form.company = Some("Acme".into());
    form.title = Some("Developer".into());
    let vcard = build_vcard(&form);

    assert!(vcard.contains("ORG:Acme"));
    assert!(vcard.contains("TITLE:Developer"));
}

#[test]
fn note_is_added() {
    let mut form = named("A");
    form.note = Some("Merhaba dünya".into());

    assert!(build_vcard(&form).contains("NOTE:Merhaba dünya"));
}

#[test]
fn note_newlines_are_escaped() {
    let mut form = named("A");
    form.note = Some("first line\nsecond line".into());
    let vcard = build_vcard(&form);

    assert!(lines(&vcard).contains(&r"NOTE:first line\nsecond line"));
}

#[test]
fn social_links_added() {
    let mut form = named("A");
    form.social
        .set(SocialPlatform::Linkedin, "https://linkedin.com/in/user");
    form.social
        .set(SocialPlatform::Instagram, "instagram.com/account");
    let vcard = build_vcard(&form);

    assert!(vcard.contains("URL:https://linkedin.com/in/user"));
    assert!(vcard.contains("URL:https://instagram.com/account"));
}

#[test]
fn empty_fields_are_skipped() {
    let vcard = build_vcard(&named("Only"));

    assert!(!vcard.contains("EMAIL:"));
    assert!(!vcard.contains("TEL;"));
    assert!(lines(&vcard).iter().all(|l| !l.starts_with("ORG:")));
    assert!(lines(&vcard).iter().all(|l| !l.starts_with("TITLE:")));
    assert!(lines(&vcard).iter().all(|l| !l.starts_with("URL:")));
}

#[test]
fn special_characters_are_escaped() {
    let mut form = empty_form();
    form.first_name = Some("Ad;Virgül".into());
    form.last_name = Some("Soyad,Test".into());
    let vcard = build_vcard(&form);

    assert!(lines(&vcard).contains(&r"N:Soyad\,Test;Ad\;Virgül;;;"));
    assert!(lines(&vcard).contains(&r"FN:Ad\;Virgül Soyad\,Test"));
}

#[test]
fn url_commas_are_escaped() {
    let mut form = named("A");
    form.website = Some("example.com/a,b".into());

    assert!(lines(&build_vcard(&form)).contains(&r"URL:https://example.com/a\,b"));
}

#[test]
fn full_form_order() {
    let vcard = build_vcard(&full_form());
    let names: Vec<&str> = lines(&vcard)
        .into_iter()
        .map(|l| l.split([':', ';']).next().unwrap_or_default())
        .collect();

    assert_eq!(
        names,
        [
            "BEGIN", "VERSION", "N", "FN", "EMAIL", "TEL", "URL", "ORG", "TITLE", "NOTE", "URL",
            "URL", "URL", "URL", "URL", "URL", "URL", "END"
        ]
    );

    let socials: Vec<&str> = lines(&vcard)
        .into_iter()
        .filter(|l| l.starts_with("URL:") && l.ends_with(".com/ali"))
        .collect();
    assert_eq!(
        socials,
        [
            "URL:https://linkedin.com/ali",
            "URL:https://instagram.com/ali",
            "URL:https://twitter.com/ali",
            "URL:https://github.com/ali",
            "URL:https://youtube.com/ali",
            "URL:https://facebook.com/ali",
            "URL:https://tiktok.com/ali",
        ]
    );
}

#[test]
fn long_note_is_folded() {
    let mut form = named("A");
    form.note = Some("lorem ipsum ".repeat(20));
    let vcard = build_vcard(&form);

    for line in lines(&vcard) {
        assert!(line.chars().count() <= 75, "line too long: {line:?}");
    }

    let note_start = lines(&vcard)
        .iter()
        .position(|l| l.starts_with("NOTE:"))
        .unwrap();
    let continuation = lines(&vcard)[note_start + 1];
    assert!(continuation.starts_with(' '));

    let unfolded = vcard.replace("\n ", "");
    assert!(unfolded.contains(&format!("NOTE:{}", "lorem ipsum ".repeat(20).trim())));
}

#[test]
fn folding_is_per_line() {
    let mut form = named("A");
    form.company = Some("c".repeat(80));
    form.title = Some("Short".into());
    let vcard = build_vcard(&form);

    assert!(lines(&vcard).contains(&"TITLE:Short"));
    assert!(lines(&vcard).contains(&format!("ORG:{}", "c".repeat(71)).as_str()));
    assert!(lines(&vcard).contains(&format!(" {}", "c".repeat(9)).as_str()));
}
