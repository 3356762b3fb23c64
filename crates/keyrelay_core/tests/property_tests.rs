//! Property-based tests for `keyrelay_core`.
//!
//! These tests verify invariants that should hold for all inputs,
//! catching edge cases that hand-written tests might miss.

use proptest::prelude::*;
use serde_json::json;

use keyrelay_core::prelude::*;

proptest! {
    /// Any JSON object survives an encode/decode round trip.
    #[test]
    fn frames_round_trip(
        id in 1u64..u64::MAX,
        action in "[a-z]{1,16}",
        value in "\\PC{0,64}"
    ) {
        let message = json!({"id": id, "action": action, "value": value});
        let frame = encode_frame(&message).unwrap();

        let mut decoder = FrameDecoder::new();
        decoder.feed(&frame);

        let decoded = decoder.next_frame().expect("complete frame").unwrap();
        prop_assert_eq!(decoded, message);
        prop_assert!(decoder.next_frame().is_none());
    }

    /// Splitting the stream at arbitrary chunk boundaries yields the same
    /// frames as feeding it all at once.
    #[test]
    fn chunk_boundaries_do_not_affect_decoding(
        payloads in prop::collection::vec("[a-zA-Z0-9 ]{0,32}", 1..6),
        splits in prop::collection::vec(1usize..16, 0..8)
    ) {
        let mut stream = Vec::new();
        for payload in &payloads {
            stream.extend(encode_frame(&json!({"data": payload})).unwrap());
        }

        let mut all_at_once = FrameDecoder::new();
        all_at_once.feed(&stream);
        let mut expected = Vec::new();
        while let Some(frame) = all_at_once.next_frame() {
            expected.push(frame.unwrap());
        }

        let mut chunked = FrameDecoder::new();
        let mut got = Vec::new();
        let mut rest: &[u8] = &stream;
        for split in splits {
            let take = split.min(rest.len());
            let (chunk, remainder) = rest.split_at(take);
            rest = remainder;
            chunked.feed(chunk);
            while let Some(frame) = chunked.next_frame() {
                got.push(frame.unwrap());
            }
        }
        chunked.feed(rest);
        while let Some(frame) = chunked.next_frame() {
            got.push(frame.unwrap());
        }

        prop_assert_eq!(got, expected);
    }

    /// A malformed frame never prevents decoding of the frame after it.
    #[test]
    fn garbage_frames_are_isolated(garbage in prop::collection::vec(any::<u8>(), 1..64)) {
        let mut stream = Vec::new();
        stream.extend(u32::try_from(garbage.len()).unwrap().to_le_bytes());
        stream.extend(&garbage);
        let follower = json!({"id": 1, "success": true});
        stream.extend(encode_frame(&follower).unwrap());

        let mut decoder = FrameDecoder::new();
        decoder.feed(&stream);

        // First frame may or may not parse depending on the garbage bytes.
        let _ = decoder.next_frame().expect("first frame complete");
        let second = decoder.next_frame().expect("second frame complete").unwrap();
        prop_assert_eq!(second, follower);
    }

    /// Masking never panics and never reveals a long value.
    #[test]
    fn masked_value_hides_long_secrets(value in "[a-zA-Z0-9_-]{24,100}") {
        let detection = DetectedSecret {
            provider: "unknown".to_string(),
            name: "TEST".to_string(),
            value: value.clone(),
            dashboard_url: None,
            tags: vec![],
            env_var_name: None,
            source_url: None,
            project: None,
        };
        prop_assert!(!detection.masked_value().contains(&value));
    }

    /// Env-pair parsing never yields duplicate (name, value) pairs.
    #[test]
    fn env_pairs_are_unique(text in "[A-Z_=a-z0-9\n\t]{0,200}") {
        let pairs = parse_env_var_pairs(&text);
        let mut seen = std::collections::HashSet::new();
        for pair in &pairs {
            prop_assert!(seen.insert((pair.name.clone(), pair.value.clone())));
        }
    }

    /// The placeholder filter accepts anything that is not a placeholder
    /// shape, including arbitrary long keys.
    #[test]
    fn long_random_keys_are_likely_real(key in "sk-[a-zA-Z0-9]{47}[b-z0-9]") {
        prop_assert!(is_likely_real_key(&key));
    }
}
