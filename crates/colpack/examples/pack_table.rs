use anyhow::Result;
use log::LevelFilter;

use colpack::{pack_with_config, row_name_column, shape_column_major, Column, Matrix, PackConfig};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("COLPACK_LOG", "error,colpack=debug"))
        .init();

    // A small table with its row names stored in the first column.
    let columns = vec![
        Column::text(["alpha", "beta", "gamma"]),
        Column::Double(vec![0.5, 1.5, 2.5]),
        Column::Double(vec![10.0, 20.0, 30.0]),
    ];

    let config = PackConfig::from_columns(&columns, 1);
    let mat = pack_with_config(&columns, &config)?;

    if let Some(Column::Character(names)) = row_name_column(&columns, config.rownames) {
        println!("Row names: {:?}", names);
    }

    if let Matrix::Double(data) = mat {
        let array = shape_column_major(data, config.nrow, config.ncol)?;
        println!("{}", array);
    }

    Ok(())
}
