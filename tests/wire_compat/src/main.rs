fn main() {
    println!("Run `cargo test -p wire-compat` to execute wire compatibility tests.");
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use uplift_protocol::{
        CompleteUploadRequest, ErrorBody, FileDescriptor, InitUploadRequest, InitUploadResponse,
    };

    /// Returns the path to the fixtures directory.
    fn fixtures_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
    }

    /// Loads a fixture JSON file and returns it as a `serde_json::Value`.
    ///
    /// Fixtures are captured from the reference backend's request/response
    /// bodies, so these tests pin the exact field names and shapes the
    /// client must speak.
    fn load_fixture(name: &str) -> serde_json::Value {
        let path = fixtures_dir().join(name);
        let data = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()));
        serde_json::from_str(&data)
            .unwrap_or_else(|e| panic!("failed to parse fixture {}: {e}", path.display()))
    }

    /// Deserializes a fixture into a Rust type, re-serializes it, and
    /// compares the JSON values (order-independent comparison).
    fn roundtrip_test<T>(name: &str)
    where
        T: serde::de::DeserializeOwned + serde::Serialize,
    {
        let fixture = load_fixture(name);
        let parsed: T = serde_json::from_value(fixture.clone())
            .unwrap_or_else(|e| panic!("failed to deserialize {name}: {e}"));
        let reserialized = serde_json::to_value(&parsed)
            .unwrap_or_else(|e| panic!("failed to re-serialize {name}: {e}"));

        assert_eq!(
            fixture, reserialized,
            "roundtrip mismatch for {name}:\n  backend: {fixture}\n  client:  {reserialized}"
        );
    }

    #[test]
    fn fixture_init_upload_request() {
        roundtrip_test::<InitUploadRequest>("init_upload_request.json");
    }

    #[test]
    fn fixture_init_upload_response() {
        roundtrip_test::<InitUploadResponse>("init_upload_response.json");
    }

    #[test]
    fn fixture_init_upload_response_no_chunk_size() {
        roundtrip_test::<InitUploadResponse>("init_upload_response_no_chunk_size.json");
    }

    #[test]
    fn fixture_complete_upload_request() {
        roundtrip_test::<CompleteUploadRequest>("complete_upload_request.json");
    }

    #[test]
    fn fixture_file_descriptor() {
        roundtrip_test::<FileDescriptor>("file_descriptor.json");
    }

    #[test]
    fn fixture_error_body() {
        roundtrip_test::<ErrorBody>("error_body.json");
    }

    #[test]
    fn fixture_upload_url_template_substitutes() {
        let fixture = load_fixture("init_upload_response.json");
        let resp: InitUploadResponse = serde_json::from_value(fixture).unwrap();
        let chunk_url = resp.chunk_url();
        assert!(!chunk_url.contains("{upload_id}"));
        assert!(chunk_url.ends_with(&resp.upload_id));
    }
}
