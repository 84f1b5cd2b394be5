use trim_core::{TrimError, VariantKind};
use trim_engine::Trimmer;

const DATA_RECORD: &str = r#"{"productId":"1","productName":"DataPack","productSubCategory":"X","quota":"DATA National/Internet 30 Days 12 GB","total_":"10000"}"#;

const MUSIC_RECORD: &str = r#"{"productId":"2","productName":"Tune","productSubCategory":"Music","quota":"Music RBT/NSP Lagu Pilihan","total_":"3000"}"#;

fn trimmer() -> Trimmer {
    Trimmer::with_defaults().unwrap()
}

fn paket(records: &[&str]) -> String {
    format!(r#"{{"to":"081234567890","paket":[{}]}}"#, records.join(","))
}

/// A recharge payload padded with an unread metadata field to an exact length
fn padded_payload(target_chars: usize) -> String {
    let base = format!(r#"{{"pad":"","paket":[{}]}}"#, DATA_RECORD);
    let pad = "x".repeat(target_chars - base.chars().count());
    let raw = format!(r#"{{"pad":"{}","paket":[{}]}}"#, pad, DATA_RECORD);
    assert_eq!(raw.chars().count(), target_chars);
    raw
}

#[test]
fn test_recharge_below_threshold_keeps_raw_quota() {
    let out = trimmer().process("DATA", &paket(&[DATA_RECORD])).unwrap();
    assert_eq!(out, "#1|DataPack(DATA National/Internet 30 Days 12 GB)|10000");
}

#[test]
fn test_recharge_above_threshold_optimizes_every_record() {
    let records = vec![DATA_RECORD; 60];
    let raw = paket(&records);
    assert!(raw.chars().count() > 7000);

    let out = trimmer().process("data", &raw).unwrap();
    assert_eq!(out, "#1|DataPack(Net 30D 12GB)|10000".repeat(60));
}

#[test]
fn test_threshold_boundary() {
    let trimmer = trimmer();

    let at_limit = trimmer.process_with_report("DATA", &padded_payload(7000)).unwrap();
    assert_eq!(at_limit.input_chars, 7000);
    assert!(!at_limit.optimized);
    assert_eq!(
        at_limit.payload,
        "#1|DataPack(DATA National/Internet 30 Days 12 GB)|10000"
    );

    let over_limit = trimmer.process_with_report("DATA", &padded_payload(7001)).unwrap();
    assert_eq!(over_limit.input_chars, 7001);
    assert!(over_limit.optimized);
    assert_eq!(over_limit.payload, "#1|DataPack(Net 30D 12GB)|10000");
}

#[test]
fn test_threshold_counts_characters_not_bytes() {
    // 3500 two-byte characters: over 7000 bytes but well under 7000 chars
    let raw = format!(
        r#"{{"note":"{}","paket":[{}]}}"#,
        "é".repeat(3500),
        DATA_RECORD
    );
    assert!(raw.len() > 7000);

    let report = trimmer().process_with_report("DATA", &raw).unwrap();
    assert!(!report.optimized);
}

#[test]
fn test_activation_example() {
    let raw = r#"{"res":[{"productId":"9","productName":"Pkg","quota":"q","price":"500"}]}"#;
    assert_eq!(trimmer().process("VF", raw).unwrap(), "#9|Pkg(q)|500");
}

#[test]
fn test_activation_ignores_recharge_fields() {
    let raw = r#"{"req":{"msisdn":"0812"},"res":[{"productId":"9","productName":"Pkg","quota":"Music RBT/NSP","price":"500","total_":"1"}]}"#;
    // Activation has no quota exclusions and reads "price"
    assert_eq!(
        trimmer().process("vf", raw).unwrap(),
        "#9|Pkg(Music RBT/NSP)|500"
    );
}

#[test]
fn test_unknown_category_never_reads_payload() {
    let err = trimmer().process("PULSA", "this is not json").unwrap_err();
    match err {
        TrimError::UnsupportedCategory { category, supported } => {
            assert_eq!(category, "PULSA");
            assert!(supported.contains("HVC_VOICE_SMS"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_malformed_payload() {
    let err = trimmer().process("DATA", "{\"paket\": [").unwrap_err();
    assert!(matches!(err, TrimError::MalformedPayload(_)));
}

#[test]
fn test_music_content_is_filtered_for_recharge() {
    let out = trimmer()
        .process("DIGITAL_MUSIC", &paket(&[MUSIC_RECORD, DATA_RECORD]))
        .unwrap();
    assert_eq!(out, "#1|DataPack(DATA National/Internet 30 Days 12 GB)|10000");
}

#[test]
fn test_all_products_excluded_is_empty_output() {
    let out = trimmer()
        .process("DATA", &paket(&[MUSIC_RECORD, MUSIC_RECORD]))
        .unwrap();
    assert_eq!(out, "");
}

#[test]
fn test_missing_fields_still_produce_tokens() {
    let raw = r#"{"paket":[{"productId":"5"},{"productName":"NoId","total_":12000}]}"#;
    assert_eq!(
        trimmer().process("ROAMING", raw).unwrap(),
        "#5|()|#|NoId()|12000"
    );
}

#[test]
fn test_gate_uses_length_before_filtering() {
    // Mostly excluded music records push the raw input over the threshold
    let mut records = vec![MUSIC_RECORD; 60];
    records.push(DATA_RECORD);
    let raw = paket(&records);
    assert!(raw.chars().count() > 7000);

    let report = trimmer().process_with_report("DATA", &raw).unwrap();
    assert!(report.optimized);
    assert_eq!(report.products, 1);
    assert_eq!(report.payload, "#1|DataPack(Net 30D 12GB)|10000");
}

#[test]
fn test_report_details() {
    let records = vec![MUSIC_RECORD, DATA_RECORD, DATA_RECORD];
    let report = trimmer().process_with_report("hvc_data", &paket(&records)).unwrap();

    assert_eq!(report.variant, VariantKind::Recharge);
    assert_eq!(report.category.as_str(), "HVC_DATA");
    let counts: Vec<(usize, usize)> = report.stages.iter().map(|s| (s.before, s.after)).collect();
    assert_eq!(counts, vec![(3, 3), (3, 3), (3, 2)]);
    assert!(!report.optimized);
    assert!(report.rewrites.is_empty());
    assert_eq!(report.output_chars, report.payload.chars().count());
    assert_eq!(report.payload_hash.len(), 64);

    let again = trimmer().process_with_report("HVC_DATA", &paket(&records)).unwrap();
    assert_eq!(again.payload_hash, report.payload_hash);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["category"], "HVC_DATA");
    assert_eq!(json["variant"], "RECHARGE");
    assert_eq!(json["stages"][2]["stage"], "quota_metadata");
}

#[test]
fn test_report_rewrite_totals() {
    let records = vec![DATA_RECORD; 60];
    let report = trimmer().process_with_report("DATA", &paket(&records)).unwrap();

    let days = report.rewrites.iter().find(|r| r.rule == "days").unwrap();
    assert_eq!(days.count, 60);
    let metadata = report.rewrites.iter().find(|r| r.rule == "metadata").unwrap();
    assert_eq!(metadata.count, 60);
}

#[test]
fn test_concurrent_invocations_agree() {
    let trimmer = trimmer();
    let raw = paket(&vec![DATA_RECORD; 60]);
    let expected = trimmer.process("DATA", &raw).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| trimmer.process("DATA", &raw).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
