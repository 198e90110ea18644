pub mod a025_smart_inventory;
