use mg_golden::GoldenError;

fn main() -> Result<(), GoldenError> {
    mg_golden::logging::init();
    mg_golden::gen_golden_data()
}
