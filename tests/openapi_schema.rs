use serde_json::Value;
use tempfile::tempdir;

#[test]
fn openapi_lists_proxy_routes_and_bearer_scheme() -> anyhow::Result<()> {
    // Build the OpenAPI document the same way the server does
    let doc = raspepix::docs::build_openapi(8000);
    let v = serde_json::to_value(&doc)?;

    let paths = v
        .get("paths")
        .and_then(Value::as_object)
        .expect("paths must exist");
    for path in [
        "/api/admin/login",
        "/api/influencers",
        "/api/influencers/{id}",
        "/api/ganhadores",
        "/api/sorteio/instantaneo",
    ] {
        assert!(paths.contains_key(path), "OpenAPI missing path '{}'", path);
    }

    let scheme = v
        .pointer("/components/securitySchemes/bearerAuth/scheme")
        .and_then(Value::as_str);
    assert_eq!(scheme, Some("bearer"));

    let props = v
        .pointer("/components/schemas/Influencer/properties")
        .and_then(Value::as_object)
        .expect("components.schemas.Influencer.properties must exist");
    for key in ["referralCode", "commissionTier", "commissionRate"] {
        assert!(props.contains_key(key), "Influencer schema missing '{}'", key);
    }

    Ok(())
}

#[test]
fn openapi_is_written_to_disk() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("openapi.json");

    raspepix::docs::write_openapi(&path, 9000)?;

    let v: Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    assert_eq!(v.pointer("/servers/0/url").and_then(Value::as_str), Some("http://localhost:9000"));

    Ok(())
}
