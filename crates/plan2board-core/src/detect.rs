use crate::error::Plan2BoardError;
use crate::extraction::{BBox, PageContent};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A room-name pattern paired with its canonical key. The key is
/// declared explicitly rather than derived from the pattern source, so
/// the pattern can use regex syntax freely.
#[derive(Debug, Clone, Copy)]
pub struct RoomPattern {
    pub key: &'static str,
    pub pattern: &'static str,
}

/// The room types the detector searches for. Order here is the room
/// order of every downstream table.
pub const ROOM_PATTERNS: &[RoomPattern] = &[
    RoomPattern {
        key: "kitchen",
        pattern: "kitchen",
    },
    RoomPattern {
        key: "living",
        pattern: "living",
    },
    RoomPattern {
        key: "bedroom",
        pattern: "bedroom",
    },
    RoomPattern {
        key: "bath",
        pattern: "bath(room)?",
    },
    RoomPattern {
        key: "dining",
        pattern: "dining",
    },
    RoomPattern {
        key: "office",
        pattern: "office",
    },
    RoomPattern {
        key: "laundry",
        pattern: "laundry",
    },
    RoomPattern {
        key: "hallway",
        pattern: "hallway",
    },
];

/// Occurrence count for one room type. Zero-match types keep their
/// entry; callers filter downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomCount {
    pub key: String,
    pub count: usize,
}

/// One room-name occurrence located on a page, for marker overlay on a
/// rendered plan image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomMarker {
    pub room_key: String,
    pub page_number: usize,
    pub line_index: usize,
    pub matched_text: String,
    pub bbox: BBox,
}

fn compile(pattern: &RoomPattern) -> Result<Regex, Plan2BoardError> {
    Regex::new(&format!("(?i){}", pattern.pattern)).map_err(|e| Plan2BoardError::Pattern {
        pattern: pattern.pattern.to_string(),
        reason: e.to_string(),
    })
}

/// Count non-overlapping case-insensitive matches of every room pattern
/// in the document text blob. Every pattern gets an entry, even at
/// count 0.
pub fn detect_rooms(blob: &str) -> Result<Vec<RoomCount>, Plan2BoardError> {
    let mut counts = Vec::with_capacity(ROOM_PATTERNS.len());
    for pattern in ROOM_PATTERNS {
        let re = compile(pattern)?;
        counts.push(RoomCount {
            key: pattern.key.to_string(),
            count: re.find_iter(blob).count(),
        });
    }
    Ok(counts)
}

/// Locate every room-name occurrence in the extractor's positioned line
/// spans. Markers carry the line bounding box; a renderer draws one
/// icon per marker.
pub fn find_markers(pages: &[PageContent]) -> Result<Vec<RoomMarker>, Plan2BoardError> {
    let compiled: Vec<(&RoomPattern, Regex)> = ROOM_PATTERNS
        .iter()
        .map(|p| compile(p).map(|re| (p, re)))
        .collect::<Result<_, _>>()?;

    let mut markers = Vec::new();
    for page in pages {
        for span in &page.line_spans {
            for (pattern, re) in &compiled {
                for m in re.find_iter(&span.text) {
                    markers.push(RoomMarker {
                        room_key: pattern.key.to_string(),
                        page_number: span.page_number,
                        line_index: span.line_index,
                        matched_text: m.as_str().to_string(),
                        bbox: span.bbox.clone(),
                    });
                }
            }
        }
    }
    Ok(markers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::LineSpan;

    fn count_of(counts: &[RoomCount], key: &str) -> usize {
        counts.iter().find(|c| c.key == key).map(|c| c.count).unwrap()
    }

    #[test]
    fn test_counts_are_case_insensitive() {
        let counts = detect_rooms("Kitchen KITCHEN kitchen").unwrap();
        assert_eq!(count_of(&counts, "kitchen"), 3);
    }

    #[test]
    fn test_zero_matches_keep_their_entry() {
        let counts = detect_rooms("kitchen").unwrap();
        assert_eq!(counts.len(), ROOM_PATTERNS.len());
        assert_eq!(count_of(&counts, "laundry"), 0);
    }

    #[test]
    fn test_bath_pattern_matches_both_forms() {
        // "bathroom" is one non-overlapping match of bath(room)?, not two
        let counts = detect_rooms("bath bathroom").unwrap();
        assert_eq!(count_of(&counts, "bath"), 2);
    }

    #[test]
    fn test_counts_follow_pattern_order() {
        let counts = detect_rooms("office kitchen").unwrap();
        assert_eq!(counts[0].key, "kitchen");
        assert_eq!(counts.last().unwrap().key, "hallway");
    }

    #[test]
    fn test_markers_located_per_occurrence() {
        let span = |page, idx, text: &str| LineSpan {
            page_number: page,
            line_index: idx,
            text: text.to_string(),
            bbox: BBox {
                x_min: 0.0,
                y_min: 0.0,
                x_max: 10.0,
                y_max: 10.0,
            },
        };
        let pages = vec![PageContent {
            page_number: 1,
            lines: vec!["Kitchen 12m2".into(), "Bedroom Bedroom".into()],
            line_spans: vec![span(1, 0, "Kitchen 12m2"), span(1, 1, "Bedroom Bedroom")],
        }];

        let markers = find_markers(&pages).unwrap();
        assert_eq!(markers.len(), 3);
        assert_eq!(markers[0].room_key, "kitchen");
        assert_eq!(markers[0].matched_text, "Kitchen");
        // two occurrences on the same line yield two markers
        let bedroom: Vec<_> = markers.iter().filter(|m| m.room_key == "bedroom").collect();
        assert_eq!(bedroom.len(), 2);
        assert_eq!(bedroom[0].line_index, 1);
    }
}
