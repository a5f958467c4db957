use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PageDotsError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        PageDotsError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        PageDotsError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PageDotsError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
