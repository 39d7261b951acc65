use depot_tour::solver::search;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    search::run()
}
