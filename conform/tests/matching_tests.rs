//! Segment-to-parent matching integration tests.
//!
//! End-to-end scenarios exercising the matcher through the public API.

use conform::prelude::*;

fn ntsc_film() -> FrameRate {
    FrameRate::from_float(23.976).unwrap()
}

fn ocf(name: &str, start_tc: &str, end_tc: &str) -> MediaDescriptor {
    MediaDescriptor::new(
        name,
        Resolution::new(1920, 1080),
        ntsc_film(),
        14_400,
        MediaKind::CameraOriginal,
    )
    .timecodes(start_tc, end_tc)
    .reel("A001")
}

/// One parent, one well-named in-range segment: exactly one High link.
#[test]
fn test_canonical_high_confidence_link() {
    let parents = vec![ocf("A001C001.mov", "01:00:00:00", "01:10:00:00")];
    let segments = vec![MediaDescriptor::new(
        "A001C001_s01.mov",
        Resolution::new(1920, 1080),
        ntsc_film(),
        240,
        MediaKind::GradedSegment,
    )
    .timecodes("01:02:00:00", "01:02:10:00")];

    let result = SegmentMatcher::new().link(&parents, &segments);

    assert_eq!(result.matched_segments, 1);
    assert!(result.unmatched_segments.is_empty());
    assert!(result.unmatched_parents.is_empty());
    assert_eq!(result.success_rate, 1.0);

    let link = &result.parents[0].children[0];
    assert_eq!(link.confidence, Confidence::High);
    assert!(link.factors.contains(&MatchFactor::FilenameContains));
}

/// A 24.0 parent never captures a 23.976 segment's rate factor, in
/// either direction.
#[test]
fn test_rate_strictness_both_directions() {
    let film = FrameRate::from_float(24.0).unwrap();
    let ntsc = ntsc_film();
    assert!(!film.is_compatible(&ntsc));
    assert!(!ntsc.is_compatible(&film));

    let mut parent = ocf("A001C001.mov", "01:00:00:00", "01:10:00:00");
    parent.frame_rate = film;

    let segment = MediaDescriptor::new(
        "A001C001_s01.mov",
        Resolution::new(1920, 1080),
        ntsc,
        240,
        MediaKind::GradedSegment,
    );

    let result = SegmentMatcher::new().link(&[parent], &[segment]);
    let link = &result.parents[0].children[0];
    assert!(!link.factors.contains(&MatchFactor::FrameRate));
}

/// Segments distribute across multiple parents by name evidence, with
/// the best-scoring parent winning.
#[test]
fn test_multi_parent_distribution() {
    let parents = vec![
        ocf("A001C001.mov", "01:00:00:00", "01:10:00:00"),
        ocf("A001C002.mov", "02:00:00:00", "02:10:00:00"),
    ];
    let segments = vec![
        MediaDescriptor::new(
            "A001C001_grade.mov",
            Resolution::new(1920, 1080),
            ntsc_film(),
            240,
            MediaKind::GradedSegment,
        )
        .timecodes("01:01:00:00", "01:01:10:00"),
        MediaDescriptor::new(
            "A001C002_grade.mov",
            Resolution::new(1920, 1080),
            ntsc_film(),
            240,
            MediaKind::GradedSegment,
        )
        .timecodes("02:01:00:00", "02:01:10:00"),
    ];

    let result = SegmentMatcher::new().link(&parents, &segments);

    assert_eq!(result.parents[0].children.len(), 1);
    assert_eq!(result.parents[1].children.len(), 1);
    assert_eq!(
        result.parents[0].children[0].segment.file_name,
        "A001C001_grade.mov"
    );
    assert_eq!(
        result.parents[1].children[0].segment.file_name,
        "A001C002_grade.mov"
    );
}

/// The linking result is a recomputed snapshot: running the same inputs
/// twice yields identical results.
#[test]
fn test_linking_snapshot_deterministic() {
    let parents = vec![
        ocf("A001C001.mov", "01:00:00:00", "01:10:00:00"),
        ocf("A001C002.mov", "02:00:00:00", "02:10:00:00"),
    ];
    let segments = vec![
        MediaDescriptor::new(
            "A001C001_s01.mov",
            Resolution::new(1920, 1080),
            ntsc_film(),
            100,
            MediaKind::GradedSegment,
        ),
        MediaDescriptor::new(
            "stray.mov",
            Resolution::new(1280, 720),
            FrameRate::from_float(30.0).unwrap(),
            50,
            MediaKind::GradedSegment,
        ),
    ];

    let matcher = SegmentMatcher::new();
    let first = matcher.link(&parents, &segments);
    let second = matcher.link(&parents, &segments);
    assert_eq!(first, second);
}

/// Success rate reflects partial matching.
#[test]
fn test_success_rate_partial() {
    let parents = vec![ocf("A001C001.mov", "01:00:00:00", "01:10:00:00")];
    let segments = vec![
        MediaDescriptor::new(
            "A001C001_s01.mov",
            Resolution::new(1920, 1080),
            ntsc_film(),
            100,
            MediaKind::GradedSegment,
        ),
        MediaDescriptor::new(
            "no_relation.mov",
            Resolution::new(720, 576),
            FrameRate::from_float(50.0).unwrap(),
            50,
            MediaKind::GradedSegment,
        ),
    ];

    let result = SegmentMatcher::new().link(&parents, &segments);
    assert_eq!(result.matched_segments, 1);
    assert_eq!(result.total_segments, 2);
    assert!((result.success_rate - 0.5).abs() < f64::EPSILON);
}
