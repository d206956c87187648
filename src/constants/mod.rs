pub mod generic_templates;
pub mod question_bank;
