use dictionary::ResolvedWord;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

/// One entry of a `presentations.batchUpdate` call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Request {
    CreateSlide(CreateSlide),
    InsertText(InsertText),
    CreateImage(CreateImage),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSlide {
    pub object_id: String,
    pub slide_layout_reference: LayoutReference,
    pub placeholder_id_mappings: Vec<PlaceholderIdMapping>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutReference {
    pub predefined_layout: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderIdMapping {
    pub object_id: String,
    pub layout_placeholder: Placeholder,
}

#[derive(Debug, Clone, Serialize)]
pub struct Placeholder {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub index: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertText {
    pub object_id: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateImage {
    pub object_id: String,
    pub url: String,
    pub element_properties: ElementProperties,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementProperties {
    pub page_object_id: String,
    pub size: Size,
    pub transform: Transform,
}

#[derive(Debug, Clone, Serialize)]
pub struct Size {
    pub width: Dimension,
    pub height: Dimension,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dimension {
    pub magnitude: f64,
    pub unit: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transform {
    pub scale_x: f64,
    pub scale_y: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub unit: &'static str,
}

// right half of a 720x405pt slide, below the title
const IMAGE_WIDTH: f64 = 280.0;
const IMAGE_HEIGHT: f64 = 187.0;
const IMAGE_LEFT: f64 = 410.0;
const IMAGE_TOP: f64 = 130.0;

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn slide(layout: &'static str, placeholders: [(&'static str, &str); 2]) -> (String, Request) {
    let slide_id = new_id();
    let request = Request::CreateSlide(CreateSlide {
        object_id: slide_id.clone(),
        slide_layout_reference: LayoutReference {
            predefined_layout: layout,
        },
        placeholder_id_mappings: placeholders
            .into_iter()
            .map(|(kind, object_id)| PlaceholderIdMapping {
                object_id: object_id.to_owned(),
                layout_placeholder: Placeholder { kind, index: 0 },
            })
            .collect(),
    });
    (slide_id, request)
}

fn insert_text(object_id: String, text: String) -> Request {
    Request::InsertText(InsertText { object_id, text })
}

pub fn body_text(record: &ResolvedWord) -> String {
    let mut lines = Vec::with_capacity(2);
    if !record.definition.is_empty() {
        lines.push(format!("Definition: {}", record.definition));
    }
    if !record.sentence.is_empty() {
        lines.push(format!("Sentence: {}", record.sentence));
    }
    lines.join("\n")
}

/// Collects slide requests in presentation order.
#[derive(Debug, Default)]
pub struct Deck {
    requests: Vec<Request>,
}

impl Deck {
    pub fn new(title: &str, subtitle: Option<&str>) -> Self {
        let mut deck = Self::default();
        deck.push_title(title, subtitle);
        deck
    }

    fn push_title(&mut self, title: &str, subtitle: Option<&str>) {
        info!(title, "creating title slide");
        let title_id = new_id();
        let subtitle_id = new_id();
        let (_, create) = slide(
            "TITLE",
            [("CENTERED_TITLE", title_id.as_str()), ("SUBTITLE", subtitle_id.as_str())],
        );
        self.requests.push(create);
        self.requests.push(insert_text(title_id, title.to_owned()));
        // the slides api rejects empty insertions
        if let Some(subtitle) = subtitle.filter(|s| !s.is_empty()) {
            self.requests.push(insert_text(subtitle_id, subtitle.to_owned()));
        }
    }

    pub fn push_word(&mut self, record: &ResolvedWord) {
        info!(word = record.word.as_str(), "creating slide");
        let title_id = new_id();
        let body_id = new_id();
        let (slide_id, create) = slide(
            "TITLE_AND_BODY",
            [("TITLE", title_id.as_str()), ("BODY", body_id.as_str())],
        );
        self.requests.push(create);
        self.requests.push(insert_text(title_id, record.word.clone()));
        let body = body_text(record);
        if !body.is_empty() {
            self.requests.push(insert_text(body_id, body));
        }
        self.requests.push(Request::CreateImage(CreateImage {
            object_id: new_id(),
            url: record.image_url.clone(),
            element_properties: ElementProperties {
                page_object_id: slide_id,
                size: Size {
                    width: Dimension {
                        magnitude: IMAGE_WIDTH,
                        unit: "PT",
                    },
                    height: Dimension {
                        magnitude: IMAGE_HEIGHT,
                        unit: "PT",
                    },
                },
                transform: Transform {
                    scale_x: 1.0,
                    scale_y: 1.0,
                    translate_x: IMAGE_LEFT,
                    translate_y: IMAGE_TOP,
                    unit: "PT",
                },
            },
        }));
    }

    pub fn requests(&self) -> &[Request] {
        &self.requests
    }
}
