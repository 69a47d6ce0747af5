pub mod html;
pub mod jsonl;
pub mod study_file;
