pub mod a001_inventory_item;
pub mod a002_filament_spool;
pub mod a003_project;
pub mod a004_tracker;
pub mod a005_material;
pub mod common;
