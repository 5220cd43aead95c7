/// Instruction to overwrite (or create) one audit file.
///
/// `new_content` is the complete file body, never a delta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpdate {
    pub file_name: String,
    pub new_content: String,
}

impl FileUpdate {
    pub fn new(file_name: impl Into<String>, new_content: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            new_content: new_content.into(),
        }
    }
}
