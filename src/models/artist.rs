use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    pub image: String,
    #[serde(rename = "firstAlbum")]
    pub first_album: String,
    pub members: Vec<String>,
}

impl Default for Artist {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            image: String::new(),
            first_album: String::new(),
            members: Vec::new(),
        }
    }
}

impl Artist {
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn detail_path(&self) -> String {
        format!("/artist?id={}", self.id)
    }
}
