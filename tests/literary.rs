use otter_fol::{
    config::Config,
    context::{Context, ContextState},
    reports::Report,
    structures::{
        formula::Formula,
        literal::{Literal, Predicate},
        term::{Constant, Term},
    },
};

fn fact(subject: &str, relation: &str, object: &str) -> Predicate {
    Predicate::new(
        Term::constant(subject),
        Constant::new(relation),
        Term::constant(object),
    )
}

fn library_context() -> Context {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut the_context = Context::from_config(Config::default());

    let facts = [
        fact("pushkin", "is_author_of", "vystrel"),
        fact("dostoevsky", "is_author_of", "crime_and_punishment"),
        fact("dostoevsky", "is_author_of", "idiot"),
        fact("silvio", "is_main_actor_of", "vystrel"),
        fact("raskolnikov", "is_main_actor_of", "crime_and_punishment"),
        fact("mishkin", "is_main_actor_of", "idiot"),
        fact("pushkin", "lived_earlier_than", "dostoevsky"),
    ];
    for fact in facts {
        assert!(the_context.add_fact(fact).is_ok());
    }

    the_context
}

fn library_query() -> Formula {
    Formula::conjunction([
        Formula::from(Literal::answer(Term::variable("X"))),
        Formula::from(Predicate::new(
            Term::variable("X"),
            Constant::new("lived_earlier_than"),
            Term::variable("Y"),
        )),
        Formula::from(Predicate::new(
            Term::variable("Y"),
            Constant::new("is_author_of"),
            Term::variable("Z"),
        )),
        Formula::from(Predicate::new(
            Term::constant("mishkin"),
            Constant::new("is_main_actor_of"),
            Term::variable("Z"),
        )),
    ])
    .unwrap()
}

mod literary {
    use super::*;

    #[test]
    fn who_lived_earlier() {
        let mut the_context = library_context();
        assert!(the_context.add_query(library_query()).is_ok());

        assert_eq!(the_context.solve(), Ok(Report::Fixpoint));
        assert_eq!(the_context.report(), Report::Fixpoint);
        assert_eq!(the_context.state, ContextState::Saturated);

        assert_eq!(the_context.value_of("X"), Some(&Term::constant("pushkin")));
        assert_eq!(the_context.value_of("Y"), Some(&Term::constant("dostoevsky")));
        assert_eq!(the_context.value_of("Z"), Some(&Term::constant("idiot")));

        let answers = the_context.answers().collect::<Vec<_>>();
        assert_eq!(
            answers,
            vec![(&Term::variable("X"), Some(&Term::constant("pushkin")))]
        );
    }

    #[test]
    fn terminates_quickly() {
        let mut the_context = library_context();
        assert!(the_context.add_query(library_query()).is_ok());
        assert!(the_context.solve().is_ok());

        // A sweep to resolve the query, and a sweep to confirm nothing changes.
        assert_eq!(the_context.counters.sweeps, 2);
        assert_eq!(the_context.substitution().len(), 3);
    }

    #[test]
    fn leftover_clauses() {
        let mut the_context = library_context();
        assert!(the_context.add_query(library_query()).is_ok());
        assert!(the_context.solve().is_ok());

        let leftovers = the_context.clause_strings();
        assert_eq!(leftovers.len(), 5);

        assert!(leftovers.contains(&"(pushkin is_author_of vystrel)".to_string()));
        assert!(leftovers.contains(&"(silvio is_main_actor_of vystrel)".to_string()));
        assert!(leftovers.contains(&"answer(pushkin)".to_string()));

        assert!(!leftovers.contains(&"(mishkin is_main_actor_of idiot)".to_string()));
        assert!(!leftovers.contains(&"(pushkin lived_earlier_than dostoevsky)".to_string()));
    }

    #[test]
    fn bounded_by_sweeps() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.set_max_sweeps(1).is_ok());

        for fact in [
            fact("mishkin", "is_main_actor_of", "idiot"),
            fact("dostoevsky", "is_author_of", "idiot"),
        ] {
            assert!(the_context.add_fact(fact).is_ok());
        }

        let query = Formula::and(
            Literal::answer(Term::variable("Z")),
            Predicate::new(
                Term::constant("mishkin"),
                Constant::new("is_main_actor_of"),
                Term::variable("Z"),
            ),
        );
        assert!(the_context.add_query(query).is_ok());

        assert_eq!(the_context.solve(), Ok(Report::SweepLimit));
        assert!(!the_context.report().converged());
        assert_eq!(the_context.state, ContextState::Exhausted);

        // The binding is made in the first sweep, regardless.
        assert_eq!(the_context.value_of("Z"), Some(&Term::constant("idiot")));
    }

    #[test]
    fn unknown_author() {
        let mut the_context = library_context();

        let query = Formula::and(
            Literal::answer(Term::variable("W")),
            Predicate::new(
                Term::variable("W"),
                Constant::new("is_author_of"),
                Term::constant("eugene_onegin"),
            ),
        );
        assert!(the_context.add_query(query).is_ok());

        assert_eq!(the_context.solve(), Ok(Report::Fixpoint));
        assert_eq!(the_context.value_of("W"), None);
        assert_eq!(the_context.clause_count(), 8);
    }
}
