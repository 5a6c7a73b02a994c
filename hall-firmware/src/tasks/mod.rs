// Task-Modul: Enthält die (einzige) Firmware-Schleife
//
// Kein Executor, keine Interrupts: main() ruft den Task direkt auf
// und kehrt nie zurück.

pub mod scan;

// Re-export Tasks für einfachen Import
pub use scan::scan_transmit_task;
