//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Request and validation logic sits in plain functions next
//! to each page component so it can be tested without a browser.

pub mod community;
pub mod find_password;
pub mod home;
pub mod mypage;
pub mod perfume_detail;
pub mod perfumes;
pub mod recommend_loading;
pub mod recommend_result;
pub mod signin;
pub mod signup;
pub mod survey;
