fn main() -> Result<(), eframe::Error> {
    vectra_gui::run()
}
