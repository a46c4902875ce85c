// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! File-based end-to-end tests for the jazzy -> humble conversion.

use std::fs;

use rosbag_convert_metadata::{convert_file, ConvertError, QosTables};
use tempfile::tempdir;

/// A representative jazzy metadata.yaml: one topic whose QoS profile is
/// written both as a list entry and in expanded per-field repetition,
/// followed by the type hash humble does not know about.
const JAZZY_DOC: &str = r#"rosbag2_bagfile_information:
  version: 9
  storage_identifier: mcap
  duration:
    nanoseconds: 151737451
  starting_time:
    nanoseconds_since_epoch: 1718356502582110964
  message_count: 7
  topics_with_message_count:
    - topic_metadata:
        name: /chatter
        type: std_msgs/msg/String
        serialization_format: cdr
        offered_qos_profiles:
          - history: keep_last
            depth: 10
            reliability: reliable
            durability: volatile
            deadline:
              sec: 9223372036
              nsec: 854775807
            lifespan:
              sec: 9223372036
              nsec: 854775807
            liveliness: automatic
            liveliness_lease_duration:
              sec: 9223372036
              nsec: 854775807
            avoid_ros_namespace_conventions: false
            history: keep_last
            depth: 10
            reliability: reliable
            durability: volatile
            deadline:
              sec: 9223372036
              nsec: 854775807
            lifespan:
              sec: 9223372036
              nsec: 854775807
            liveliness: automatic
            liveliness_lease_duration:
              sec: 9223372036
              nsec: 854775807
            avoid_ros_namespace_conventions: false
        type_description_hash: RIHS01_6f1ba27bd0bc3e93bc0e2cb55a270130
      message_count: 7
  compression_format: ""
  compression_mode: ""
  files:
    - path: rosbag_0.mcap
      message_count: 7
  custom_data: ~
  ros_distro: jazzy
"#;

const HUMBLE_DOC: &str = r#"rosbag2_bagfile_information:
  version: 9
  storage_identifier: mcap
  duration:
    nanoseconds: 151737451
  starting_time:
    nanoseconds_since_epoch: 1718356502582110964
  message_count: 7
  topics_with_message_count:
    - topic_metadata:
        name: /chatter
        type: std_msgs/msg/String
        serialization_format: cdr
        offered_qos_profiles: "- history: 1\n  depth: 10\n  reliability: 1\n  durability: 2\n  deadline:\n    sec: 9223372036\n    nsec: 854775807\n  lifespan:\n    sec: 9223372036\n    nsec: 854775807\n  liveliness: 1\n  liveliness_lease_duration:\n    sec: 9223372036\n    nsec: 854775807\n  false"
      message_count: 7
  compression_format: ""
  compression_mode: ""
  files:
    - path: rosbag_0.mcap
      message_count: 7
  custom_data: this yaml is refactored from jazzy style for compatibility with humble
  ros_distro: humble
"#;

#[test]
fn converts_jazzy_document_end_to_end() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("metadata.yaml");
    let output = dir.path().join("metadata_humble.yaml");
    fs::write(&input, JAZZY_DOC).expect("write input");

    let tables = QosTables::humble();
    let stats = convert_file(&input, &output, &tables).expect("convert");

    let converted = fs::read_to_string(&output).expect("read output");
    assert_eq!(converted, HUMBLE_DOC);
    assert_eq!(stats.blocks_rewritten, 1);
    assert_eq!(stats.substitutions, 2);
    assert_eq!(stats.lines_skipped, 16);
}

#[test]
fn document_without_blocks_is_still_valid_output() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("metadata.yaml");
    let output = dir.path().join("metadata_humble.yaml");
    fs::write(&input, "rosbag2_bagfile_information:\n  version: 9\n").expect("write input");

    let tables = QosTables::humble();
    let stats = convert_file(&input, &output, &tables).expect("convert");

    let converted = fs::read_to_string(&output).expect("read output");
    assert_eq!(converted, "rosbag2_bagfile_information:\n  version: 9\n");
    assert_eq!(stats.blocks_rewritten, 0);
}

#[test]
fn missing_input_aborts_without_creating_output() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("no_such_metadata.yaml");
    let output = dir.path().join("metadata_humble.yaml");

    let tables = QosTables::humble();
    let err = convert_file(&input, &output, &tables).expect_err("must fail");

    assert!(matches!(err, ConvertError::OpenInput { .. }));
    assert!(!output.exists(), "no partial output may be written");
}

#[test]
fn unwritable_output_is_reported() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("metadata.yaml");
    fs::write(&input, "x\n").expect("write input");
    // Output path points into a directory that does not exist.
    let output = dir.path().join("missing_dir").join("metadata_humble.yaml");

    let tables = QosTables::humble();
    let err = convert_file(&input, &output, &tables).expect_err("must fail");
    assert!(matches!(err, ConvertError::CreateOutput { .. }));
}
