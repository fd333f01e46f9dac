#[cfg(test)]
mod tests {
    use stint::api::{generate_session_code, session_code_hash, sha256_hex, sign_request, RankingClient};
    use stint::libs::config::ServerConfig;

    fn server_config() -> ServerConfig {
        ServerConfig {
            api_url: "https://api.example.com/api/ranking".to_string(),
            web_url: "https://example.com".to_string(),
            app_id: "1001".to_string(),
            app_secret: "secret123".to_string(),
        }
    }

    #[test]
    fn test_sha256_known_vectors() {
        assert_eq!(sha256_hex(""), "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855");
        assert_eq!(sha256_hex("abc"), "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");
    }

    #[test]
    fn test_signature_concatenation_order() {
        let signature = sign_request("1001", "payload", 1700000000000, "secret123");
        assert_eq!(signature, sha256_hex("1001payload1700000000000secret123"));
        assert_eq!(signature.len(), 64);
        assert!(signature.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_signature_depends_on_every_input() {
        let base = sign_request("1001", "payload", 1700000000000, "secret123");
        assert_ne!(base, sign_request("1002", "payload", 1700000000000, "secret123"));
        assert_ne!(base, sign_request("1001", "other", 1700000000000, "secret123"));
        assert_ne!(base, sign_request("1001", "payload", 1700000000001, "secret123"));
        assert_ne!(base, sign_request("1001", "payload", 1700000000000, "secret124"));
    }

    #[test]
    fn test_session_code_hash_matches_sha256() {
        let code = "deadbeef";
        assert_eq!(session_code_hash(code), sha256_hex(code));
    }

    #[test]
    fn test_generated_session_codes_are_unique_hex() {
        let first = generate_session_code();
        let second = generate_session_code();

        // 32 random bytes as lowercase hex.
        assert_eq!(first.len(), 64);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_ne!(first, second);
    }

    #[test]
    fn test_bind_url_carries_only_the_hash() {
        let config = server_config();
        let client = RankingClient::new(&config);
        let session_code = generate_session_code();

        let url = client.bind_url(&session_code);
        assert!(url.starts_with("https://example.com/ranking/bind?app_id=1001&"));
        assert!(url.contains(&format!("session_code_hash={}", session_code_hash(&session_code))));
        assert!(url.contains("&timestamp="));
        assert!(url.contains("&signature="));
        // The plaintext code never appears in a browser-visible URL.
        assert!(!url.contains(&session_code));
    }

    #[test]
    fn test_bind_url_signature_verifies() {
        let config = server_config();
        let client = RankingClient::new(&config);
        let url = client.bind_url("code");

        let query = url.split_once('?').unwrap().1;
        let mut timestamp = None;
        let mut signature = None;
        for pair in query.split('&') {
            match pair.split_once('=').unwrap() {
                ("timestamp", value) => timestamp = Some(value.parse::<i64>().unwrap()),
                ("signature", value) => signature = Some(value.to_string()),
                _ => {}
            }
        }

        let expected = sign_request(
            &config.app_id,
            &session_code_hash("code"),
            timestamp.unwrap(),
            &config.app_secret,
        );
        assert_eq!(signature.unwrap(), expected);
    }
}
