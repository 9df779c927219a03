use serde::{Deserialize, Serialize};

/// A single verse as returned by the upstream API.
///
/// Only the identifying fields are guaranteed; everything else is optional
/// and unknown fields are kept so nothing the upstream sends is dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verse {
    pub geeta_id: String,
    pub chapter: u32,
    pub verse: u32,
    #[serde(default)]
    pub shlok: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transliteration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lyrics: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Static chapter metadata, read-only reference data.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Chapter {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
}

/// The 18 chapters of the Bhagavad Gita.
pub const CHAPTERS: [Chapter; 18] = [
    Chapter { id: 1, title: "Chapter 1", description: "Arjuna Vishada Yoga" },
    Chapter { id: 2, title: "Chapter 2", description: "Sankhya Yoga" },
    Chapter { id: 3, title: "Chapter 3", description: "Karma Yoga" },
    Chapter { id: 4, title: "Chapter 4", description: "Jnana Yoga" },
    Chapter { id: 5, title: "Chapter 5", description: "Sannyasa Yoga" },
    Chapter { id: 6, title: "Chapter 6", description: "Dhyana Yoga" },
    Chapter { id: 7, title: "Chapter 7", description: "Jnana Vijnana Yoga" },
    Chapter { id: 8, title: "Chapter 8", description: "Aksara Brahma Yoga" },
    Chapter { id: 9, title: "Chapter 9", description: "Raja Vidya Yoga" },
    Chapter { id: 10, title: "Chapter 10", description: "Vibhuti Yoga" },
    Chapter { id: 11, title: "Chapter 11", description: "Visvarupa Darsana Yoga" },
    Chapter { id: 12, title: "Chapter 12", description: "Bhakti Yoga" },
    Chapter { id: 13, title: "Chapter 13", description: "Kshetra Kshetrajna Yoga" },
    Chapter { id: 14, title: "Chapter 14", description: "Gunatraya Vibhaga Yoga" },
    Chapter { id: 15, title: "Chapter 15", description: "Purushottama Yoga" },
    Chapter { id: 16, title: "Chapter 16", description: "Daivasura Sampad Yoga" },
    Chapter { id: 17, title: "Chapter 17", description: "Shraddhatraya Vibhaga Yoga" },
    Chapter { id: 18, title: "Chapter 18", description: "Moksha Sannyasa Yoga" },
];

/// Look up chapter metadata by its 1-based id.
pub fn chapter_by_id(id: u32) -> Option<&'static Chapter> {
    CHAPTERS.iter().find(|chapter| chapter.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_all_eighteen_chapters() {
        assert_eq!(CHAPTERS.len(), 18);
        for (index, chapter) in CHAPTERS.iter().enumerate() {
            assert_eq!(chapter.id as usize, index + 1);
        }
    }

    #[test]
    fn chapter_lookup_by_id() {
        assert_eq!(chapter_by_id(2).unwrap().description, "Sankhya Yoga");
        assert!(chapter_by_id(0).is_none());
        assert!(chapter_by_id(19).is_none());
    }

    #[test]
    fn verse_keeps_unknown_fields() {
        let verse: Verse = serde_json::from_str(
            r#"{"geeta_id":"1:1","chapter":1,"verse":1,"shlok":"...","speaker":"Sanjaya"}"#,
        )
        .unwrap();

        assert_eq!(verse.geeta_id, "1:1");
        assert_eq!(verse.extra.get("speaker").unwrap(), "Sanjaya");
    }
}
