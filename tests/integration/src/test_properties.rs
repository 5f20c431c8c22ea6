//! Properties that hold for any request, key, and timestamp.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use base64::Engine;
    use base64::engine::general_purpose::STANDARD as BASE64;
    use opsign_auth::canonical::build_canonical_request;
    use opsign_auth::chunker::{AUTHORIZATION_CHUNK_WIDTH, chunk_count};
    use opsign_auth::hashing::{ContentHasher, EMPTY_CONTENT_HASH};
    use opsign_auth::{AuthHeaderAssembler, CachedTimestamp, FixedTimestamp, Request, signer};
    use opsign_core::DigestAlgorithm;

    use crate::{client_key, create_user_request, principal, timestamp};

    #[test]
    fn test_should_split_signature_into_ceil_len_over_width_headers() {
        let key = client_key();
        let assembler = AuthHeaderAssembler::default();
        for path in ["/", "/users", "/organizations/myorg/nodes?q=web"] {
            let request = Request::parse("GET", path, "").unwrap();
            let headers = assembler
                .sign(&request, &principal("user"), &timestamp("t"), &key)
                .unwrap();
            let signature = headers.signature();
            let chunks = headers.authorization_chunks();

            assert_eq!(chunks.len(), chunk_count(signature.len()));
            assert_eq!(
                chunks.len(),
                signature.len().div_ceil(AUTHORIZATION_CHUNK_WIDTH)
            );
            assert!(chunks.iter().all(|c| c.len() <= AUTHORIZATION_CHUNK_WIDTH));
            assert_eq!(chunks.concat(), signature);
        }
    }

    #[test]
    fn test_should_produce_signature_verifiable_with_public_key() {
        let key = client_key();
        let request = create_user_request("myuser");
        let who = principal("user");
        let when = timestamp("2026-10-16T08:00:00Z");

        let headers = AuthHeaderAssembler::default()
            .sign(&request, &who, &when, &key)
            .unwrap();
        let canonical = build_canonical_request(ContentHasher::default(), &request, &who, &when);
        let raw = BASE64.decode(headers.signature()).unwrap();

        signer::verify(
            DigestAlgorithm::Sha1,
            canonical.as_str(),
            &raw,
            &key.public_key(),
        )
        .unwrap();
    }

    #[test]
    fn test_should_hash_empty_body_to_fixed_constant() {
        let request = Request::parse("DELETE", "/users/myuser", "").unwrap();
        let headers = opsign_auth::sign(&request, "user", "timestamp", &client_key()).unwrap();
        assert_eq!(headers.content_hash(), Some(EMPTY_CONTENT_HASH));
        assert_eq!(EMPTY_CONTENT_HASH, "2jmj7l5rSw0yVb/vlWAYkK/YBwk=");
    }

    #[test]
    fn test_should_resign_differently_with_fresh_timestamp() {
        let key = client_key();
        let request = create_user_request("myuser");
        let assembler = AuthHeaderAssembler::default();

        let first = assembler
            .sign(&request, &principal("user"), &timestamp("2026-10-16T08:00:00Z"), &key)
            .unwrap();
        let retry = assembler
            .sign(&request, &principal("user"), &timestamp("2026-10-16T08:00:05Z"), &key)
            .unwrap();

        assert_eq!(first.content_hash(), retry.content_hash());
        assert_ne!(first.signature(), retry.signature());
    }

    #[test]
    fn test_should_share_timestamp_from_cached_source() {
        let key = client_key();
        let clock = CachedTimestamp::new(
            FixedTimestamp::new(timestamp("2026-10-16T08:00:00Z")),
            Duration::from_secs(60),
        );
        let assembler = AuthHeaderAssembler::default();
        let request = create_user_request("myuser");

        let first = assembler
            .sign_now(&request, &principal("user"), &clock, &key)
            .unwrap();
        let second = assembler
            .sign_now(&request, &principal("user"), &clock, &key)
            .unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first.get("X-Ops-Timestamp"),
            Some("2026-10-16T08:00:00Z")
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_should_sign_distinct_requests_in_parallel() {
        let key = Arc::new(client_key());
        let assembler = Arc::new(AuthHeaderAssembler::default());

        let tasks: Vec<_> = (0..8)
            .map(|i| {
                let key = Arc::clone(&key);
                let assembler = Arc::clone(&assembler);
                tokio::task::spawn_blocking(move || {
                    let request = create_user_request(&format!("user{i}"));
                    let headers = assembler
                        .sign(&request, &principal("user"), &timestamp("timestamp"), &key)
                        .unwrap();
                    (i, headers)
                })
            })
            .collect();

        let mut signatures = Vec::new();
        for task in tasks {
            let (i, headers) = task.await.unwrap();
            let expected = assembler
                .sign(
                    &create_user_request(&format!("user{i}")),
                    &principal("user"),
                    &timestamp("timestamp"),
                    &key,
                )
                .unwrap();
            assert_eq!(headers, expected);
            signatures.push(headers.signature());
        }

        signatures.sort();
        signatures.dedup();
        assert_eq!(signatures.len(), 8);
    }
}
