use activity_board_core::{FilterCriteria, SortKey};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub criteria: FilterCriteria,
    /// Category entries, without the "all" entry
    pub categories: Vec<String>,
    pub on_change: Callback<FilterCriteria>,
}

fn with_category(criteria: &FilterCriteria, value: String) -> FilterCriteria {
    criteria.clone().with_category(value)
}

fn with_sort(criteria: &FilterCriteria, value: &str) -> FilterCriteria {
    criteria
        .clone()
        .with_sort_key(value.parse().unwrap_or_default())
}

fn with_search(criteria: &FilterCriteria, value: String) -> FilterCriteria {
    criteria.clone().with_search(value)
}

/// Category, sort and search controls
#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let on_category = {
        let criteria = props.criteria.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(with_category(&criteria, select.value()));
        })
    };

    let on_sort = {
        let criteria = props.criteria.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(with_sort(&criteria, &select.value()));
        })
    };

    let on_search = {
        let criteria = props.criteria.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_change.emit(with_search(&criteria, input.value()));
        })
    };

    let selected_category = props.criteria.category_value();

    html! {
        <div class="activity-filters">
            <label class="activity-filters__field">
                {"Category"}
                <select id="category-filter" onchange={on_category}>
                    <option value="" selected={selected_category.is_empty()}>{"All Categories"}</option>
                    {for props.categories.iter().map(|category| html! {
                        <option
                            value={category.clone()}
                            selected={category == selected_category}
                        >
                            {category}
                        </option>
                    })}
                </select>
            </label>

            <label class="activity-filters__field">
                {"Sort by"}
                <select id="sort-filter" onchange={on_sort}>
                    {for SortKey::ALL.iter().map(|key| html! {
                        <option value={key.as_str()} selected={*key == props.criteria.sort_key}>
                            {key.label()}
                        </option>
                    })}
                </select>
            </label>

            <label class="activity-filters__field">
                {"Search"}
                <input
                    id="search-filter"
                    type="text"
                    placeholder="Search activities..."
                    value={props.criteria.search.clone()}
                    oninput={on_search}
                />
            </label>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_changes_keep_other_criteria() {
        let criteria = FilterCriteria::new().with_search("chess");

        let changed = with_category(&criteria, "Games".to_string());
        assert_eq!(changed.category.as_deref(), Some("Games"));
        assert_eq!(changed.search, "chess");

        let changed = with_sort(&changed, "availability");
        assert_eq!(changed.sort_key, SortKey::Availability);
        assert_eq!(changed.category.as_deref(), Some("Games"));
    }

    #[test]
    fn test_all_categories_and_unknown_sort() {
        let criteria = FilterCriteria::new()
            .with_category("Games")
            .with_sort_key(SortKey::Time);

        assert_eq!(with_category(&criteria, String::new()).category, None);
        assert_eq!(with_sort(&criteria, "bogus").sort_key, SortKey::Name);
    }
}
