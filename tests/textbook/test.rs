use std::error::Error;

use approx::assert_abs_diff_eq;

use relp_pivot::{
    basis_exchange, find_basis, is_standard_basis_vector, make_basis_element, BasisExchangeError,
    DenseMatrix, PivotError,
};

use super::{constraints_only, with_objective_row};

#[test]
fn slack_basis_is_kept() {
    let tableau = constraints_only();
    let result = basis_exchange(&tableau, &[2, 3]).unwrap();

    assert_eq!(result, tableau);
}

#[test]
fn enter_first_variable() {
    let tableau = constraints_only();
    let result = basis_exchange(&tableau, &[0, 3]).unwrap();

    assert_eq!(result.data(), vec![
        vec![1f64, 1f64, 1f64, 0f64, 4f64],
        vec![0f64, -1f64, -2f64, 1f64, -2f64],
    ]);
    assert_eq!(tableau, constraints_only());
}

#[test]
fn objective_row_is_pivoted_like_any_other() {
    let tableau = with_objective_row();
    assert_eq!(find_basis(&tableau), vec![Some(2), Some(3), Some(4)]);

    // x enters at the first constraint
    let result = basis_exchange(&tableau, &[0, 3, 4]).unwrap();

    let expected = [
        [1f64, 1f64, 1f64, 0f64, 0f64, 4f64],
        [0f64, 2f64, -1f64, 1f64, 0f64, 2f64],
        [0f64, 1f64, 3f64, 0f64, 1f64, 12f64],
    ];
    for (i, row) in expected.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            assert_abs_diff_eq!(result.get_value(i, j), value, epsilon = 1e-9);
        }
    }
    for (i, &column) in [0, 3, 4].iter().enumerate() {
        assert!(is_standard_basis_vector(&result.column(column)));
        assert_eq!(result.get_value(i, column), 1f64);
    }
}

#[test]
fn walk_through_bases() {
    let mut tableau = with_objective_row();

    make_basis_element(&mut tableau, 1, 1).unwrap();
    make_basis_element(&mut tableau, 0, 0).unwrap();
    assert_eq!(find_basis(&tableau), vec![Some(0), Some(1), Some(4)]);

    // x = 3, y = 1, objective value 11
    assert_abs_diff_eq!(tableau.get_value(0, 5), 3f64, epsilon = 1e-9);
    assert_abs_diff_eq!(tableau.get_value(1, 5), 1f64, epsilon = 1e-9);
    assert_abs_diff_eq!(tableau.get_value(2, 5), 11f64, epsilon = 1e-9);

    // Same result in one go
    let direct = basis_exchange(&with_objective_row(), &[0, 1, 4]).unwrap();
    for i in 0..3 {
        for j in 0..6 {
            assert_abs_diff_eq!(direct.get_value(i, j), tableau.get_value(i, j), epsilon = 1e-9);
        }
    }
}

#[test]
fn first_pivot_fails() {
    let tableau = DenseMatrix::<f64>::from_primitive_data(vec![vec![0, 1], vec![1, 0]]).unwrap();
    let error = basis_exchange(&tableau, &[0, 1]).unwrap_err();

    match &error {
        BasisExchangeError::Pivot { position, column, source } => {
            assert_eq!((*position, *column), (0, 0));
            assert!(matches!(source, PivotError::BasisConflict { basic_row: 1, .. }));
        },
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(error.source().is_some());
}

#[test]
fn error_messages() {
    let tableau = constraints_only();

    let error = basis_exchange(&tableau, &[0]).unwrap_err();
    assert!(error.to_string().contains("need 2 basis variables"));
    assert!(error.source().is_none());

    let error = basis_exchange(&DenseMatrix::new(vec![vec![0f64, 1f64], vec![2f64, 0f64]]).unwrap(), &[0, 1])
        .unwrap_err();
    assert!(error.to_string().contains("need nonzero pivot element"));
}
