use chrono::NaiveDate;
use web_sys::InputEvent;
use yew::prelude::*;

mod model;
mod stats;
mod storage;

use model::{
    add_expense, build_expense, remove_expense, today, today_iso, Expense, ExpenseDraft, User,
    EXPENSE_CATEGORIES,
};
use storage::{clear_session, load_expenses, load_session, save_expenses, save_session};

#[derive(Clone, Copy, PartialEq)]
enum StatIcon {
    Dollar,
    Calendar,
    TrendingUp,
}

#[function_component(App)]
fn app() -> Html {
    let session = use_state(load_session);

    let on_login = {
        let session = session.clone();
        Callback::from(move |user: User| {
            save_session(&user);
            session.set(Some(user));
        })
    };

    let on_logout = {
        let session = session.clone();
        Callback::from(move |_| {
            clear_session();
            session.set(None);
        })
    };

    html! {
        <div class="min-h-screen bg-background">
            {
                match &*session {
                    Some(user) => html! {
                        <>
                            <Header user={user.clone()} on_logout={on_logout} />
                            <main class="container mx-auto px-4 py-8">
                                <Dashboard key={user.id.clone()} user={user.clone()} />
                            </main>
                        </>
                    },
                    None => html! { <AuthScreen on_login={on_login} /> },
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HeaderProps {
    user: User,
    on_logout: Callback<()>,
}

#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_| on_logout.emit(()))
    };

    html! {
        <header class="bg-card border-b border-border sticky top-0 z-50">
            <div class="container mx-auto px-4 py-4 flex items-center justify-between">
                <div class="flex items-center gap-3">
                    <div class="bg-primary p-2 rounded-xl text-primary-foreground">
                        { icon_dollar() }
                    </div>
                    <div>
                        <h1 class="text-2xl font-bold text-foreground">{"Expense Tracker"}</h1>
                        <p class="text-sm text-muted-foreground">{"Smart financial management"}</p>
                    </div>
                </div>
                <div class="flex items-center gap-4">
                    <div class="text-right">
                        <p class="font-medium text-foreground">{ format!("Welcome, {}", props.user.name) }</p>
                        <p class="text-sm text-muted-foreground">{ props.user.email.clone() }</p>
                    </div>
                    <button onclick={on_logout} class="flex items-center gap-2 px-4 py-2 border border-border rounded-lg text-sm font-medium text-foreground hover:bg-red-50 hover:text-red-700 transition-colors">
                        { icon_log_out() }
                        <span>{"Logout"}</span>
                    </button>
                </div>
            </div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct DashboardProps {
    user: User,
}

#[function_component(Dashboard)]
fn dashboard(props: &DashboardProps) -> Html {
    let expenses = use_state(|| load_expenses(&props.user.id));
    let list_notice = use_state(|| None::<String>);

    let on_add = {
        let expenses = expenses.clone();
        let list_notice = list_notice.clone();
        let user_id = props.user.id.clone();
        Callback::from(move |expense: Expense| {
            let next = add_expense(&expenses, expense);
            save_expenses(&user_id, &next);
            expenses.set(next);
            list_notice.set(None);
        })
    };

    let on_delete = {
        let expenses = expenses.clone();
        let list_notice = list_notice.clone();
        let user_id = props.user.id.clone();
        Callback::from(move |id: String| {
            let next = remove_expense(&expenses, &id);
            save_expenses(&user_id, &next);
            expenses.set(next);
            list_notice.set(Some("Expense deleted.".to_string()));
        })
    };

    let today = today();
    let total_spent = stats::total(&expenses);
    let month_total = stats::this_month_total(&expenses, today);
    let month_count = stats::this_month_count(&expenses, today);
    let average = stats::average(&expenses);

    let count_line = if expenses.is_empty() {
        "No expenses yet. Add your first expense to get started!".to_string()
    } else if expenses.len() == 1 {
        "1 expense recorded".to_string()
    } else {
        format!("{} expenses recorded", expenses.len())
    };

    html! {
        <div class="space-y-8">
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <StatCard
                    title="Total Expenses"
                    value={format_currency(total_spent)}
                    caption={"All time spending".to_string()}
                    icon={StatIcon::Dollar}
                />
                <StatCard
                    title="This Month"
                    value={format_currency(month_total)}
                    caption={format!("{} transaction{}", month_count, if month_count == 1 { "" } else { "s" })}
                    icon={StatIcon::Calendar}
                />
                <StatCard
                    title="Average"
                    value={format_currency(average)}
                    caption={"Per transaction".to_string()}
                    icon={StatIcon::TrendingUp}
                />
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                <div class="lg:col-span-1">
                    <div class="bg-card rounded-[10px] p-6 border border-border shadow-sm">
                        <div class="flex items-center gap-2 mb-1 text-foreground">
                            { icon_plus() }
                            <h3 class="font-bold text-foreground text-lg">{"Add New Expense"}</h3>
                        </div>
                        <p class="text-sm text-muted-foreground mb-4">{"Track your spending by adding new expenses"}</p>
                        <ExpenseForm user_id={props.user.id.clone()} on_add={on_add} />
                    </div>
                </div>

                <div class="lg:col-span-2 space-y-6">
                    {
                        if expenses.is_empty() {
                            html! {}
                        } else {
                            html! { <ExpenseStats expenses={(*expenses).clone()} /> }
                        }
                    }

                    <div class="bg-card rounded-[10px] border border-border shadow-sm overflow-hidden">
                        <div class="p-6 border-b border-border">
                            <h3 class="font-bold text-foreground text-lg">{"Recent Expenses"}</h3>
                            <p class="text-sm text-muted-foreground">{ count_line }</p>
                            {
                                if let Some(msg) = &*list_notice {
                                    html! { <p class="text-sm text-green-600 mt-2">{ msg.clone() }</p> }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                        <div class="p-6">
                            <ExpenseList expenses={(*expenses).clone()} on_delete={on_delete} />
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct StatCardProps {
    title: &'static str,
    value: String,
    caption: String,
    icon: StatIcon,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="bg-card p-6 rounded-[10px] shadow-sm border border-border flex justify-between items-start">
            <div>
                <p class="text-muted-foreground text-[10px] font-bold mb-1 tracking-widest uppercase">{ props.title }</p>
                <h3 class="text-2xl font-bold text-foreground tracking-tight">{ props.value.clone() }</h3>
                <p class="text-xs text-muted-foreground mt-1">{ props.caption.clone() }</p>
            </div>
            <div class="p-3 bg-secondary rounded-[10px] text-foreground">
                {
                    match props.icon {
                        StatIcon::Dollar => icon_dollar(),
                        StatIcon::Calendar => icon_calendar(),
                        StatIcon::TrendingUp => icon_trending_up(),
                    }
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ExpenseFormProps {
    user_id: String,
    on_add: Callback<Expense>,
}

#[function_component(ExpenseForm)]
fn expense_form(props: &ExpenseFormProps) -> Html {
    let form_title = use_state(|| "".to_string());
    let form_amount = use_state(|| "".to_string());
    let form_category = use_state(|| "".to_string());
    let form_date = use_state(today_iso);
    let form_error = use_state(|| None::<String>);
    let form_success = use_state(|| None::<String>);

    let on_submit = {
        let form_title = form_title.clone();
        let form_amount = form_amount.clone();
        let form_category = form_category.clone();
        let form_date = form_date.clone();
        let form_error = form_error.clone();
        let form_success = form_success.clone();
        let user_id = props.user_id.clone();
        let on_add = props.on_add.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let draft = ExpenseDraft {
                title: (*form_title).clone(),
                amount: (*form_amount).clone(),
                category: (*form_category).clone(),
                date: if form_date.is_empty() {
                    today_iso()
                } else {
                    (*form_date).clone()
                },
            };

            match build_expense(&draft, &user_id) {
                Ok(expense) => {
                    on_add.emit(expense);
                    // reset form, date back to today
                    form_title.set("".to_string());
                    form_amount.set("".to_string());
                    form_category.set("".to_string());
                    form_date.set(today_iso());
                    form_error.set(None);
                    form_success.set(Some("Expense added successfully!".to_string()));
                }
                Err(err) => {
                    form_success.set(None);
                    form_error.set(Some(err.to_string()));
                }
            }
        })
    };

    html! {
        <form class="space-y-4" onsubmit={on_submit}>
            <div class="space-y-1">
                <label class="text-sm font-medium text-foreground">{"Title"}</label>
                <input
                    type="text"
                    placeholder="e.g., Lunch at restaurant"
                    value={(*form_title).clone()}
                    oninput={{
                        let form_title = form_title.clone();
                        Callback::from(move |e: InputEvent| {
                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                            form_title.set(input.value());
                        })
                    }}
                    class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                />
            </div>

            <div class="space-y-1">
                <label class="text-sm font-medium text-foreground">{"Amount ($)"}</label>
                <input
                    type="number"
                    step="0.01"
                    placeholder="0.00"
                    value={(*form_amount).clone()}
                    oninput={{
                        let form_amount = form_amount.clone();
                        Callback::from(move |e: InputEvent| {
                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                            form_amount.set(input.value());
                        })
                    }}
                    class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                />
            </div>

            <div class="space-y-1">
                <label class="text-sm font-medium text-foreground">{"Category"}</label>
                <select
                    onchange={{
                        let form_category = form_category.clone();
                        Callback::from(move |e: Event| {
                            let input: web_sys::HtmlSelectElement = e.target_unchecked_into();
                            form_category.set(input.value());
                        })
                    }}
                    class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                >
                    <option value="" selected={form_category.is_empty()}>{"Select a category"}</option>
                    { for EXPENSE_CATEGORIES.iter().map(|category| html! {
                        <option value={*category} selected={*form_category == *category}>{ *category }</option>
                    }) }
                </select>
            </div>

            <div class="space-y-1">
                <label class="text-sm font-medium text-foreground">{"Date"}</label>
                <input
                    type="date"
                    value={(*form_date).clone()}
                    oninput={{
                        let form_date = form_date.clone();
                        Callback::from(move |e: InputEvent| {
                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                            form_date.set(input.value());
                        })
                    }}
                    class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                />
            </div>

            {
                if let Some(msg) = &*form_error {
                    html! { <p class="text-sm text-red-500">{ msg.clone() }</p> }
                } else if let Some(msg) = &*form_success {
                    html! { <p class="text-sm text-green-600">{ msg.clone() }</p> }
                } else {
                    html! {}
                }
            }

            <button type="submit" class="w-full flex items-center justify-center gap-2 bg-primary text-primary-foreground py-2 rounded-lg font-semibold hover:opacity-90 transition-opacity">
                { icon_plus() }
                {"Add Expense"}
            </button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
struct ExpenseStatsProps {
    expenses: Vec<Expense>,
}

#[function_component(ExpenseStats)]
fn expense_stats(props: &ExpenseStatsProps) -> Html {
    let total_spent = stats::total(&props.expenses);
    let categories = stats::category_totals(&props.expenses);
    let months = stats::monthly_totals(&props.expenses);
    let peak_month = months.iter().map(|m| m.total).fold(0.0f64, f64::max);

    html! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            <div class="bg-card rounded-[10px] p-6 border border-border shadow-sm">
                <div class="flex items-center gap-2 mb-1 text-foreground">
                    { icon_pie_chart() }
                    <h3 class="font-bold text-foreground text-lg">{"Spending by Category"}</h3>
                </div>
                <p class="text-sm text-muted-foreground mb-4">{"Breakdown of your expenses by category"}</p>
                {
                    if categories.is_empty() {
                        html! { <p class="text-sm text-muted-foreground text-center py-8">{"No data to display"}</p> }
                    } else {
                        html! {
                            <div class="space-y-3">
                                { for categories.iter().map(|item| {
                                    let percent = if total_spent > 0.0 {
                                        (item.total / total_spent * 100.0).round() as i64
                                    } else {
                                        0
                                    };
                                    html! {
                                        <div class="flex flex-col gap-1 text-sm">
                                            <div class="flex items-center justify-between">
                                                <span class="text-foreground">{ item.name }</span>
                                                <div class="text-right">
                                                    <span class="font-semibold text-foreground">{ format_currency(item.total) }</span>
                                                    <span class="text-muted-foreground ml-2">
                                                        { format!("{} expense{}", item.count, if item.count == 1 { "" } else { "s" }) }
                                                    </span>
                                                </div>
                                            </div>
                                            <div class="h-2 w-full bg-secondary rounded-full overflow-hidden">
                                                <div class="h-full bg-primary" style={format!("width: {}%", percent)}></div>
                                            </div>
                                        </div>
                                    }
                                }) }
                            </div>
                        }
                    }
                }
            </div>

            <div class="bg-card rounded-[10px] p-6 border border-border shadow-sm">
                <div class="flex items-center gap-2 mb-1 text-foreground">
                    { icon_trending_up() }
                    <h3 class="font-bold text-foreground text-lg">{"Monthly Trends"}</h3>
                </div>
                <p class="text-sm text-muted-foreground mb-4">{"Your spending patterns over time"}</p>
                {
                    if months.is_empty() {
                        html! { <p class="text-sm text-muted-foreground text-center py-8">{"No data to display"}</p> }
                    } else {
                        html! {
                            <div class="space-y-3">
                                { for months.iter().map(|month| {
                                    let percent = if peak_month > 0.0 {
                                        (month.total / peak_month * 100.0).round() as i64
                                    } else {
                                        0
                                    };
                                    html! {
                                        <div class="flex flex-col gap-1 text-sm">
                                            <div class="flex items-center justify-between">
                                                <span class="text-foreground">{ month.label.clone() }</span>
                                                <div class="text-right">
                                                    <span class="font-semibold text-foreground">{ format_currency(month.total) }</span>
                                                    <span class="text-muted-foreground ml-2">
                                                        { format!("{} expense{}", month.count, if month.count == 1 { "" } else { "s" }) }
                                                    </span>
                                                </div>
                                            </div>
                                            <div class="h-2 w-full bg-secondary rounded-full overflow-hidden">
                                                <div class="h-full bg-accent" style={format!("width: {}%", percent)}></div>
                                            </div>
                                        </div>
                                    }
                                }) }
                            </div>
                        }
                    }
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ExpenseListProps {
    expenses: Vec<Expense>,
    on_delete: Callback<String>,
}

#[function_component(ExpenseList)]
fn expense_list(props: &ExpenseListProps) -> Html {
    if props.expenses.is_empty() {
        return html! {
            <div class="text-center py-12">
                <div class="mx-auto bg-secondary p-4 rounded-full w-fit mb-4 text-muted-foreground">
                    { icon_receipt() }
                </div>
                <h3 class="text-lg font-medium text-foreground mb-2">{"No expenses yet"}</h3>
                <p class="text-muted-foreground">{"Start tracking your expenses by adding your first one!"}</p>
            </div>
        };
    }

    html! {
        <div class="space-y-3">
            { for props.expenses.iter().map(|expense| html! {
                <ExpenseItem key={expense.id.clone()} expense={expense.clone()} on_delete={props.on_delete.clone()} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ExpenseItemProps {
    expense: Expense,
    on_delete: Callback<String>,
}

#[function_component(ExpenseItem)]
fn expense_item(props: &ExpenseItemProps) -> Html {
    let on_delete_click = {
        let on_delete = props.on_delete.clone();
        let id = props.expense.id.clone();
        Callback::from(move |_| {
            if let Some(window) = web_sys::window() {
                let confirmed = window
                    .confirm_with_message("Are you sure you want to delete this expense?")
                    .unwrap_or(false);
                if confirmed {
                    on_delete.emit(id.clone());
                }
            }
        })
    };

    let display_date = match NaiveDate::parse_from_str(&props.expense.date, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => props.expense.date.clone(),
    };

    html! {
        <div class="bg-card border border-border rounded-[10px] p-4 hover:shadow-md transition-shadow">
            <div class="flex items-center justify-between">
                <div class="flex-1">
                    <div class="flex items-center justify-between mb-2">
                        <h3 class="font-semibold text-foreground">{ props.expense.title.clone() }</h3>
                        <span class="text-lg font-bold text-green-600">{ format_currency(props.expense.amount) }</span>
                    </div>
                    <div class="flex items-center gap-4 text-sm text-muted-foreground">
                        <div class="flex items-center gap-1">
                            { icon_tag_small() }
                            <span class="bg-secondary text-secondary-foreground px-2 py-1 rounded-full text-xs font-medium">
                                { props.expense.category.clone() }
                            </span>
                        </div>
                        <div class="flex items-center gap-1">
                            { icon_calendar_small() }
                            <span>{ display_date }</span>
                        </div>
                    </div>
                </div>
                <button
                    onclick={on_delete_click}
                    class="ml-4 p-2 rounded-lg text-red-600 hover:text-red-700 hover:bg-red-50 transition-colors"
                    aria-label="Delete expense"
                >
                    { icon_trash() }
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct AuthScreenProps {
    on_login: Callback<User>,
}

#[function_component(AuthScreen)]
fn auth_screen(props: &AuthScreenProps) -> Html {
    let is_login = use_state(|| true);
    let name = use_state(|| "".to_string());
    let email = use_state(|| "".to_string());
    let password = use_state(|| "".to_string());
    let confirm_password = use_state(|| "".to_string());
    let error = use_state(|| None::<String>);

    let on_submit = {
        let is_login = is_login.clone();
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let confirm_password = confirm_password.clone();
        let error = error.clone();
        let on_login = props.on_login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let name_val = name.trim().to_string();
            let email_val = email.trim().to_string();
            let password_val = (*password).clone();
            let confirm_val = (*confirm_password).clone();

            if email_val.is_empty() || password_val.is_empty() {
                error.set(Some("Email and password are required".to_string()));
                return;
            }

            if password_val.len() < 8 {
                error.set(Some("Password must be at least 8 characters".to_string()));
                return;
            }

            if !*is_login {
                if name_val.is_empty() {
                    error.set(Some("Name is required".to_string()));
                    return;
                }
                if password_val != confirm_val {
                    error.set(Some("Passwords do not match".to_string()));
                    return;
                }
            }

            error.set(None);

            // No backend: the id is derived from the email so the same
            // account lands on the same expense slot across logins, and
            // the login-mode display name falls back to the email local part.
            let display_name = if *is_login {
                email_val.split('@').next().unwrap_or_default().to_string()
            } else {
                name_val
            };

            on_login.emit(User {
                id: email_val.to_lowercase(),
                name: display_name,
                email: email_val,
            });
        })
    };

    let toggle_mode = {
        let is_login = is_login.clone();
        let error = error.clone();
        Callback::from(move |_| {
            error.set(None);
            is_login.set(!*is_login);
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-background">
            <div class="w-full max-w-md bg-card border border-border rounded-2xl shadow-lg p-8">
                <div class="text-center mb-6">
                    <div class="mx-auto bg-primary p-3 rounded-xl w-fit mb-4 text-primary-foreground">
                        { icon_dollar() }
                    </div>
                    <h1 class="text-2xl font-bold text-foreground">{ if *is_login { "Welcome back" } else { "Create account" } }</h1>
                    <p class="text-sm text-muted-foreground mt-2">
                        { if *is_login { "Sign in to track your expenses." } else { "Start managing your finances." } }
                    </p>
                </div>

                <form class="space-y-4" onsubmit={on_submit}>
                    if !*is_login {
                        <div class="space-y-1">
                            <label class="text-sm font-medium text-foreground">{"Name"}</label>
                            <input
                                type="text"
                                class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                                value={(*name).clone()}
                                oninput={{
                                    let name = name.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                        name.set(input.value());
                                    })
                                }}
                            />
                        </div>
                    }
                    <div class="space-y-1">
                        <label class="text-sm font-medium text-foreground">{"Email"}</label>
                        <input
                            type="email"
                            class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                            value={(*email).clone()}
                            oninput={{
                                let email = email.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    email.set(input.value());
                                })
                            }}
                        />
                    </div>
                    <div class="space-y-1">
                        <label class="text-sm font-medium text-foreground">{"Password"}</label>
                        <input
                            type="password"
                            class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                            value={(*password).clone()}
                            oninput={{
                                let password = password.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    password.set(input.value());
                                })
                            }}
                        />
                    </div>

                    if !*is_login {
                        <div class="space-y-1">
                            <label class="text-sm font-medium text-foreground">{"Confirm Password"}</label>
                            <input
                                type="password"
                                class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                                value={(*confirm_password).clone()}
                                oninput={{
                                    let confirm_password = confirm_password.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                        confirm_password.set(input.value());
                                    })
                                }}
                            />
                        </div>
                    }

                    if let Some(msg) = &*error {
                        <div class="text-sm text-red-500">{ msg.clone() }</div>
                    }

                    <button
                        type="submit"
                        class="w-full bg-primary text-primary-foreground py-2 rounded-lg font-semibold hover:opacity-90 transition-opacity"
                    >
                        { if *is_login { "Login" } else { "Sign up" } }
                    </button>
                </form>

                <div class="mt-6 text-center text-sm text-muted-foreground">
                    { if *is_login { "No account?" } else { "Already have an account?" } }
                    <button class="ml-2 text-primary font-semibold" onclick={toggle_mode}>
                        { if *is_login { "Sign up" } else { "Login" } }
                    </button>
                </div>
            </div>
        </div>
    }
}

fn format_with_commas(value: i64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn format_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as i64;
    format!("{}${}.{:02}", sign, format_with_commas(cents / 100), cents % 100)
}

fn icon_base(path: &'static str) -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d={path}></path>
        </svg>
    }
}

fn icon_small(path: &'static str) -> Html {
    html! {
        <svg width="12" height="12" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d={path}></path>
        </svg>
    }
}

fn icon_dollar() -> Html {
    icon_base("M12 2v20M17 5H9.5a3.5 3.5 0 000 7h5a3.5 3.5 0 010 7H6")
}
fn icon_calendar() -> Html {
    icon_base("M3 5h18v16H3zM16 3v4M8 3v4M3 9h18")
}
fn icon_calendar_small() -> Html {
    icon_small("M3 5h18v16H3zM16 3v4M8 3v4M3 9h18")
}
fn icon_trending_up() -> Html {
    icon_base("M3 17l6-6 4 4 7-7")
}
fn icon_pie_chart() -> Html {
    icon_base("M21.21 15.89A10 10 0 118 2.83M22 12A10 10 0 0012 2v10z")
}
fn icon_receipt() -> Html {
    icon_base("M4 2h16v20l-2-1-2 1-2-1-2 1-2-1-2 1-2-1-2 1zM8 7h8M8 11h8M8 15h5")
}
fn icon_tag_small() -> Html {
    icon_small("M20.59 13.41L12 22 2 12V2h10z")
}
fn icon_trash() -> Html {
    icon_base("M3 6h18M8 6V4h8v2M6 6l1 14h10l1-14M10 11v6M14 11v6")
}
fn icon_log_out() -> Html {
    icon_base("M9 21H5a2 2 0 01-2-2V5a2 2 0 012-2h4M16 17l5-5-5-5M21 12H9")
}
fn icon_plus() -> Html {
    icon_base("M12 5v14M5 12h14")
}

fn main() {
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::{format_currency, format_with_commas};

    #[test]
    fn commas_every_three_digits() {
        assert_eq!(format_with_commas(0), "0");
        assert_eq!(format_with_commas(999), "999");
        assert_eq!(format_with_commas(1000), "1,000");
        assert_eq!(format_with_commas(1234567), "1,234,567");
    }

    #[test]
    fn currency_renders_sign_and_cents() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(12.5), "$12.50");
        assert_eq!(format_currency(1234.56), "$1,234.56");
        assert_eq!(format_currency(-5.0), "-$5.00");
    }
}
