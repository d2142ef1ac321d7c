//! Filtering and ordering of the in-memory project collection.

use super::models::{Project, ProjectFilters, SortOrder};

/// Apply `filters` to `projects`, returning a new ordered listing.
///
/// Without filters the collection is returned in load order. Sorting
/// is stable, so projects sharing a published date keep their relative order.
pub fn query(projects: &[Project], filters: Option<&ProjectFilters>) -> Vec<Project> {
    let Some(filters) = filters else {
        return projects.to_vec();
    };

    let mut result: Vec<Project> = projects
        .iter()
        .filter(|project| filters.matches(project))
        .cloned()
        .collect();

    match filters.sort_by {
        Some(SortOrder::Newest) => {
            result.sort_by(|a, b| b.published_sort_key().cmp(&a.published_sort_key()))
        }
        Some(SortOrder::Oldest) => {
            result.sort_by(|a, b| a.published_sort_key().cmp(&b.published_sort_key()))
        }
        None => {}
    }

    result
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;
    use crate::domain::fixtures::{
        make_project, two_project_catalog, with_position, with_published_at,
    };

    fn ids(projects: &[Project]) -> Vec<i64> {
        projects.iter().map(|p| p.id.as_i64()).collect()
    }

    #[test]
    fn returns_everything_without_filters() {
        let catalog = two_project_catalog();
        assert_eq!(ids(&query(&catalog, None)), vec![1, 2]);
        assert_eq!(
            ids(&query(&catalog, Some(&ProjectFilters::default()))),
            vec![1, 2]
        );
    }

    #[test]
    fn search_is_case_insensitive_over_title() {
        let catalog = two_project_catalog();
        let result = query(&catalog, Some(&ProjectFilters::default().search("website")));
        assert_eq!(ids(&result), vec![1]);
    }

    #[test]
    fn search_matches_description() {
        let catalog = two_project_catalog();
        let result = query(&catalog, Some(&ProjectFilters::default().search("PYTHON")));
        assert_eq!(ids(&result), vec![2]);
    }

    #[test]
    fn empty_search_term_is_ignored() {
        let catalog = two_project_catalog();
        let result = query(&catalog, Some(&ProjectFilters::default().search("")));
        assert_eq!(ids(&result), vec![1, 2]);
    }

    #[test]
    fn filters_by_category() {
        let catalog = two_project_catalog();
        let result = query(&catalog, Some(&ProjectFilters::default().categories([2])));
        assert_eq!(ids(&result), vec![2]);
    }

    #[test]
    fn filters_by_industry() {
        let catalog = two_project_catalog();
        let result = query(&catalog, Some(&ProjectFilters::default().industries([10])));
        assert_eq!(ids(&result), vec![1]);
    }

    #[test]
    fn filters_by_skills() {
        let catalog = two_project_catalog();
        let result = query(&catalog, Some(&ProjectFilters::default().skills([100])));
        assert_eq!(ids(&result), vec![1]);
    }

    #[test]
    fn filters_by_specialties() {
        let catalog = two_project_catalog();
        let result = query(&catalog, Some(&ProjectFilters::default().specialties([300])));
        assert_eq!(ids(&result), vec![2]);
    }

    #[test]
    fn ids_within_one_filter_are_alternatives() {
        let catalog = two_project_catalog();
        let result = query(&catalog, Some(&ProjectFilters::default().skills([100, 200])));
        assert_eq!(ids(&result), vec![1, 2]);
    }

    #[test]
    fn filter_kinds_are_conjunctive() {
        let catalog = two_project_catalog();
        let filters = ProjectFilters::default().categories([1]).skills([200]);
        assert!(query(&catalog, Some(&filters)).is_empty());
    }

    #[test]
    fn empty_id_list_is_no_filter() {
        let catalog = two_project_catalog();
        let result = query(&catalog, Some(&ProjectFilters::default().categories(Vec::new())));
        assert_eq!(ids(&result), vec![1, 2]);
    }

    #[test]
    fn skill_match_can_come_from_any_position() {
        let project = with_position(
            with_position(make_project(7, "Mobile app", "Flutter"), &[(1, "Dart")], &[]),
            &[(2, "Kotlin")],
            &[],
        );
        let result = query(&[project], Some(&ProjectFilters::default().skills([2])));
        assert_eq!(ids(&result), vec![7]);
    }

    #[test]
    fn result_is_always_a_subset() {
        let catalog = two_project_catalog();
        let combinations = [
            ProjectFilters::default(),
            ProjectFilters::default().search("project"),
            ProjectFilters::default().categories([1, 2, 3]),
            ProjectFilters::default().industries([99]),
            ProjectFilters::default().skills([100]).sorted(SortOrder::Oldest),
            ProjectFilters::default().specialties([300]).sorted(SortOrder::Newest),
        ];

        for filters in combinations {
            let result = query(&catalog, Some(&filters));
            assert!(result.len() <= catalog.len());
            assert!(result.iter().all(|p| catalog.contains(p)));
        }
    }

    #[test]
    fn sorts_by_newest() {
        let catalog = two_project_catalog();
        let result = query(
            &catalog,
            Some(&ProjectFilters::default().sorted(SortOrder::Newest)),
        );
        assert_eq!(ids(&result), vec![1, 2]);
    }

    #[test]
    fn sorts_by_oldest() {
        let catalog = two_project_catalog();
        let result = query(
            &catalog,
            Some(&ProjectFilters::default().sorted(SortOrder::Oldest)),
        );
        assert_eq!(ids(&result), vec![2, 1]);
    }

    #[test]
    fn oldest_is_reverse_of_newest() {
        let catalog = vec![
            with_published_at(make_project(1, "a", ""), datetime!(2023-05-01 00:00 UTC)),
            with_published_at(make_project(2, "b", ""), datetime!(2025-03-01 00:00 UTC)),
            with_published_at(make_project(3, "c", ""), datetime!(2024-09-01 00:00 UTC)),
        ];

        let newest = ids(&query(
            &catalog,
            Some(&ProjectFilters::default().sorted(SortOrder::Newest)),
        ));
        let mut oldest = ids(&query(
            &catalog,
            Some(&ProjectFilters::default().sorted(SortOrder::Oldest)),
        ));
        oldest.reverse();

        assert_eq!(newest, vec![2, 3, 1]);
        assert_eq!(newest, oldest);
    }

    #[test]
    fn unpublished_projects_sort_as_epoch() {
        let catalog = vec![
            make_project(1, "draft", ""),
            with_published_at(make_project(2, "live", ""), datetime!(2024-01-01 00:00 UTC)),
            with_published_at(make_project(3, "ancient", ""), datetime!(1960-01-01 00:00 UTC)),
        ];

        let newest = query(
            &catalog,
            Some(&ProjectFilters::default().sorted(SortOrder::Newest)),
        );
        assert_eq!(ids(&newest), vec![2, 1, 3]);
    }

    #[test]
    fn ties_keep_input_order() {
        let at = datetime!(2024-01-01 00:00 UTC);
        let catalog = vec![
            with_published_at(make_project(5, "e", ""), at),
            with_published_at(make_project(3, "c", ""), at),
            with_published_at(make_project(4, "d", ""), at),
        ];

        let result = query(
            &catalog,
            Some(&ProjectFilters::default().sorted(SortOrder::Newest)),
        );
        assert_eq!(ids(&result), vec![5, 3, 4]);
    }
}
