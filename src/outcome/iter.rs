use crate::outcome::core::Outcome;

pub struct Iter<'a, A> {
    inner: Option<&'a A>,
}

impl<'a, A> Iterator for Iter<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

pub struct IterMut<'a, A> {
    inner: Option<&'a mut A>,
}

impl<'a, A> Iterator for IterMut<'a, A> {
    type Item = &'a mut A;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

pub struct IntoIter<A> {
    inner: Option<A>,
}

impl<A> Iterator for IntoIter<A> {
    type Item = A;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<E, A> IntoIterator for Outcome<E, A> {
    type Item = A;
    type IntoIter = IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Outcome::Ok(value) => IntoIter { inner: Some(value) },
            Outcome::Err(_) => IntoIter { inner: None },
        }
    }
}

impl<'a, E, A> IntoIterator for &'a Outcome<E, A> {
    type Item = &'a A;
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, E, A> IntoIterator for &'a mut Outcome<E, A> {
    type Item = &'a mut A;
    type IntoIter = IterMut<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<E, A> Outcome<E, A> {
    pub fn iter(&self) -> Iter<'_, A> {
        match self {
            Outcome::Ok(value) => Iter { inner: Some(value) },
            Outcome::Err(_) => Iter { inner: None },
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, A> {
        match self {
            Outcome::Ok(value) => IterMut { inner: Some(value) },
            Outcome::Err(_) => IterMut { inner: None },
        }
    }
}
