use todolist_core::db::open_db_in_memory;
use todolist_core::{
    ItemStore, ListStore, NewTodoItem, NewTodoList, RepoError, TodoListUpdate, ValidationError,
};

#[test]
fn add_returns_empty_list() {
    let conn = open_db_in_memory().unwrap();
    let lists = ListStore::new(&conn);

    let created = lists.add(&NewTodoList::new("Groceries")).unwrap();
    assert!(created.id > 0);
    assert_eq!(created.title, "Groceries");
    assert!(created.items.is_empty());

    assert_eq!(lists.get(created.id).unwrap().unwrap(), created);
}

#[test]
fn add_rejects_empty_title() {
    let conn = open_db_in_memory().unwrap();
    let lists = ListStore::new(&conn);

    let err = lists.add(&NewTodoList::new("")).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::ListTitleLength { chars: 0 })
    ));
    assert!(lists.get_all().unwrap().is_empty());
}

#[test]
fn get_eagerly_loads_items() {
    let conn = open_db_in_memory().unwrap();
    let lists = ListStore::new(&conn);
    let items = ItemStore::new(&conn);

    let groceries = lists.add(&NewTodoList::new("Groceries")).unwrap();
    let chores = lists.add(&NewTodoList::new("Chores")).unwrap();
    let milk = items.add(&NewTodoItem::new("Milk").in_list(groceries.id)).unwrap();
    let eggs = items.add(&NewTodoItem::new("Eggs").in_list(groceries.id)).unwrap();
    items.add(&NewTodoItem::new("Vacuum").in_list(chores.id)).unwrap();
    items.add(&NewTodoItem::new("Unassigned")).unwrap();

    let loaded = lists.get(groceries.id).unwrap().unwrap();
    assert_eq!(loaded.items, vec![milk, eggs]);
}

#[test]
fn get_all_includes_items_per_list() {
    let conn = open_db_in_memory().unwrap();
    let lists = ListStore::new(&conn);
    let items = ItemStore::new(&conn);

    let groceries = lists.add(&NewTodoList::new("Groceries")).unwrap();
    let empty = lists.add(&NewTodoList::new("Empty")).unwrap();
    let milk = items.add(&NewTodoItem::new("Milk").in_list(groceries.id)).unwrap();
    items.add(&NewTodoItem::new("Unassigned")).unwrap();

    let all = lists.get_all().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, groceries.id);
    assert_eq!(all[0].items, vec![milk]);
    assert_eq!(all[1].id, empty.id);
    assert!(all[1].items.is_empty());
}

#[test]
fn update_renames_and_keeps_items() {
    let conn = open_db_in_memory().unwrap();
    let lists = ListStore::new(&conn);
    let items = ItemStore::new(&conn);

    let list = lists.add(&NewTodoList::new("Shop")).unwrap();
    let milk = items.add(&NewTodoItem::new("Milk").in_list(list.id)).unwrap();

    let updated = lists
        .update(&TodoListUpdate {
            id: list.id,
            title: "Groceries".to_string(),
        })
        .unwrap()
        .unwrap();

    assert_eq!(updated.title, "Groceries");
    assert_eq!(updated.items, vec![milk]);
}

#[test]
fn update_missing_list_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let lists = ListStore::new(&conn);

    let result = lists
        .update(&TodoListUpdate {
            id: 5,
            title: "Nowhere".to_string(),
        })
        .unwrap();
    assert!(result.is_none());
}

#[test]
fn remove_detaches_items_without_deleting_them() {
    let conn = open_db_in_memory().unwrap();
    let lists = ListStore::new(&conn);
    let items = ItemStore::new(&conn);

    let list = lists.add(&NewTodoList::new("Groceries")).unwrap();
    let milk = items.add(&NewTodoItem::new("Milk").in_list(list.id)).unwrap();
    let bread = items.add(&NewTodoItem::new("Bread").in_list(list.id)).unwrap();

    let removed = lists.remove(list.id).unwrap();
    assert_eq!(removed.id, list.id);
    assert_eq!(removed.items.len(), 2);
    assert!(removed.items.iter().all(|item| item.list_id.is_none()));

    assert!(!lists.exists(list.id).unwrap());
    for id in [milk.id, bread.id] {
        let item = items.get(id).unwrap().unwrap();
        assert!(item.list_id.is_none());
    }
    assert_eq!(items.get_all().unwrap().len(), 2);
}

#[test]
fn remove_missing_list_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let lists = ListStore::new(&conn);

    let err = lists.remove(3).unwrap_err();
    assert!(matches!(err, RepoError::ListNotFound(3)));
}

#[test]
fn items_cannot_join_a_removed_list() {
    let conn = open_db_in_memory().unwrap();
    let lists = ListStore::new(&conn);
    let items = ItemStore::new(&conn);

    let list = lists.add(&NewTodoList::new("Temporary")).unwrap();
    lists.remove(list.id).unwrap();

    let err = items
        .add(&NewTodoItem::new("Late item").in_list(list.id))
        .unwrap_err();
    assert!(matches!(err, RepoError::ListNotFound(id) if id == list.id));
}
