//! 产品管理：模型、仓库、服务、处理器与页面

pub mod handler;
pub mod model;
pub mod repository;
pub mod service;
pub mod view;
