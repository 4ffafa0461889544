//! Product-scoped catalog entities: product records and promotion membership.

pub mod entity;
