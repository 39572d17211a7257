pub mod graham_scan;
