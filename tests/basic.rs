use otter_fol::{
    config::Config,
    context::Context,
    reports::Report,
    structures::{
        clause::Clause,
        formula::Formula,
        literal::{Literal, Predicate},
        term::{Constant, Term},
    },
    types::err::{self},
};

fn p(subject: &str, object: &str) -> Predicate {
    Predicate::new(Term::constant(subject), Constant::new("p"), Term::constant(object))
}

mod basic {
    use otter_fol::db::substitution::Substitution;
    use otter_fol::procedures::equality::Equivalent;

    use super::*;

    #[test]
    fn double_negation() {
        let formula = Formula::or(
            Formula::and(p("a", "b"), Literal::Negation(p("b", "c"))),
            Literal::answer(Term::variable("X")),
        );
        assert_eq!(formula.negate().negate(), formula);
    }

    #[test]
    fn flatten_and_rebuild() {
        let formula = Formula::disjunction([
            Literal::from(p("a", "b")),
            Literal::Negation(p("b", "c")),
            Literal::answer(Term::variable("X")),
        ])
        .unwrap();

        let clauses = formula.clauses().unwrap();
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].size(), 3);
        assert_eq!(clauses[0].to_formula(), formula);
    }

    #[test]
    fn nested_conjunction() {
        let formula = Formula::or(
            p("a", "b"),
            Formula::and(p("b", "c"), p("c", "d")),
        );
        assert_eq!(formula.clauses(), Err(err::FormulaError::NestedConjunction));

        let mut the_context = Context::from_config(Config::default());
        assert_eq!(
            the_context.add_formula(&formula),
            Err(err::ErrorKind::Formula(err::FormulaError::NestedConjunction))
        );
        assert_eq!(the_context.clause_count(), 0);
    }

    #[test]
    fn empty_remainders() {
        let mut substitution = Substitution::default();
        let fact = Clause::from(Literal::from(p("a", "b")));
        let denial = Clause::from(Literal::Negation(p("a", "b")));

        let (a, b) = substitution.resolve(&fact, &denial).unwrap();
        assert!(a.is_none());
        assert!(b.is_none());
    }

    #[test]
    fn partial_remainder() {
        let mut substitution = Substitution::default();
        let fact = Clause::from(Literal::from(p("a", "b")));
        let query = Formula::or(
            Literal::Negation(Predicate::new(
                Term::variable("X"),
                Constant::new("p"),
                Term::constant("b"),
            )),
            Literal::answer(Term::variable("X")),
        )
        .clauses()
        .unwrap()
        .pop()
        .unwrap();

        let (a, b) = substitution.resolve(&fact, &query).unwrap();
        assert!(a.is_none());

        let expected = Clause::from(Literal::answer(Term::constant("a")));
        assert!(b.unwrap().equivalent(&expected, &substitution));
        assert_eq!(substitution.value_of("X"), Some(&Term::constant("a")));
    }

    #[test]
    fn substitution_only_grows() {
        let mut substitution = Substitution::default();

        let facts = [
            Clause::from(Literal::from(p("a", "b"))),
            Clause::from(Literal::from(p("b", "c"))),
        ];
        let query = Formula::or(
            Formula::or(
                Literal::Negation(Predicate::new(
                    Term::variable("X"),
                    Constant::new("p"),
                    Term::variable("Y"),
                )),
                Literal::Negation(Predicate::new(
                    Term::variable("Y"),
                    Constant::new("p"),
                    Term::constant("c"),
                )),
            ),
            Literal::answer(Term::variable("X")),
        )
        .clauses()
        .unwrap()
        .pop()
        .unwrap();

        let mut sizes = vec![substitution.len()];
        let mut remainder = Some(query);
        for _ in 0..2 {
            for fact in &facts {
                if let Some(clause) = remainder.take() {
                    let (_, query_remainder) = substitution.resolve(fact, &clause).unwrap();
                    remainder = query_remainder;
                }
                sizes.push(substitution.len());
            }
        }

        assert!(sizes.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(substitution.value_of("Y"), Some(&Term::constant("b")));
        assert_eq!(substitution.value_of("X"), Some(&Term::constant("a")));
    }

    #[test]
    fn transitive_flag_is_inert() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.add_fact(p("a", "b").with_transitive(true)).is_ok());
        assert!(the_context.add_fact(p("b", "c").with_transitive(true)).is_ok());

        let query = Formula::and(
            Literal::answer(Term::variable("X")),
            Predicate::new(Term::variable("X"), Constant::new("p"), Term::constant("c"))
                .with_transitive(true),
        );
        assert!(the_context.add_query(query).is_ok());

        assert_eq!(the_context.solve(), Ok(Report::Fixpoint));
        assert_eq!(the_context.value_of("X"), Some(&Term::constant("b")));
    }

    #[test]
    fn configuration_closes() {
        let mut the_context = Context::from_config(Config::default());
        assert_eq!(
            the_context.set_max_sweeps(0),
            Err(err::ConfigError::OutOfBounds("max_sweeps"))
        );
        assert!(the_context.set_max_sweeps(4).is_ok());

        assert!(the_context.add_fact(p("a", "b")).is_ok());
        assert_eq!(
            the_context.set_max_sweeps(8),
            Err(err::ConfigError::InvalidState("max_sweeps"))
        );
        assert_eq!(the_context.config.max_sweeps.value, 4);
    }
}
