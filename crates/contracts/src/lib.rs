//! Общие типы конвертера: транзакции маркетплейсов, строки выгрузки в 1С,
//! метаданные и результаты UseCase.

pub mod domain;
pub mod enums;
pub mod projections;
pub mod shared;
pub mod usecases;
