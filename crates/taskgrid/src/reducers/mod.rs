//! Pure reducers - one per state slice, orchestrated by `app_reducer`

pub mod add_form_reducer;
pub mod app_reducer;
pub mod task_table_reducer;
